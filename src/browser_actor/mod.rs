//! Browser navigation for hosted payment links.

mod actor;
pub mod error;

pub use actor::*;
pub use error::*;
