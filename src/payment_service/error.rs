use thiserror::Error;
use crate::browser_actor::BrowserError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Invalid payment link: {0}")]
    InvalidLink(String),
    #[error(transparent)]
    Browser(#[from] BrowserError),
}
