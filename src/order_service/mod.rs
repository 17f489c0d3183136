//! Order checkout pipeline.

mod service;
pub mod pricing;
pub mod error;

pub use service::*;
pub use error::*;
