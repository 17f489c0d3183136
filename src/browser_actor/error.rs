use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
