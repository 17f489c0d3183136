use tokio::sync::mpsc;
use crate::browser_actor::BrowserError;
use crate::messages::BrowserRequest;

/// Client for the browser actor.
#[derive(Clone)]
pub struct BrowserClient {
    sender: mpsc::Sender<BrowserRequest>,
}

impl BrowserClient {
    pub fn new(sender: mpsc::Sender<BrowserRequest>) -> Self {
        Self { sender }
    }
}

client_method!(BrowserClient => fn open(url: String, target: String) -> () as BrowserRequest::Open, Error = BrowserError);
