//! Payment tier selection and the hosted payment-link redirect.

mod service;
pub mod error;

pub use service::*;
pub use error::*;
