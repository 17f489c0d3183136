use thiserror::Error;

/// Errors raised while talking to the remote order API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
    #[error("API transport error: {0}")]
    Transport(String),
    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("API response could not be decoded: {0}")]
    Decode(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
