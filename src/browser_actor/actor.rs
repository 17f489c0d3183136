use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use crate::app_system::BrowserConfig;
use crate::clients::BrowserClient;
use crate::messages::{BrowserRequest, ServiceResponse};
use super::BrowserError;

/// Opens links with the platform opener (or a configured command).
pub struct BrowserActor {
    receiver: mpsc::Receiver<BrowserRequest>,
    program: String,
    args: Vec<String>,
}

impl BrowserActor {
    pub fn new(config: &BrowserConfig) -> (Self, BrowserClient) {
        // tokio rejects a zero-capacity channel.
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let (program, args) = match &config.opener {
            Some(opener) => (opener.clone(), Vec::new()),
            None => platform_opener(),
        };
        let actor = Self {
            receiver,
            program,
            args,
        };
        (actor, BrowserClient::new(sender))
    }

    #[instrument(name = "browser_actor", skip(self), fields(program = %self.program))]
    pub async fn run(mut self) {
        info!("BrowserActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BrowserRequest::Open { url, target, respond_to } => {
                    self.handle_open(url, target, respond_to).await;
                }
            }
        }
        info!("BrowserActor stopped");
    }

    #[instrument(fields(url = %url, target = %target), skip(self, url, target, respond_to))]
    async fn handle_open(&self, url: String, target: String, respond_to: ServiceResponse<(), BrowserError>) {
        debug!("Processing open request");
        let result = self.launch(&url).await;
        match &result {
            Ok(()) => info!("Link opened"),
            Err(e) => error!(error = %e, "Opening link failed"),
        }
        let _ = respond_to.send(result);
    }

    // The system opener always hands the url to a new browser tab or window,
    // so `target` is informational here.
    async fn launch(&self, url: &str) -> Result<(), BrowserError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .status()
            .await
            .map_err(|e| BrowserError::Launch(format!("{}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(BrowserError::Launch(format!("{} exited with {}", self.program, status)))
        }
    }
}

fn platform_opener() -> (String, Vec<String>) {
    if cfg!(target_os = "windows") {
        ("cmd".to_string(), vec!["/C".to_string(), "start".to_string(), String::new()])
    } else if cfg!(target_os = "macos") {
        ("open".to_string(), Vec::new())
    } else {
        ("xdg-open".to_string(), Vec::new())
    }
}
