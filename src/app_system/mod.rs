//! System orchestration, configuration, and tracing setup.

pub mod checkout_system;
pub mod config;
pub mod tracing;

pub use checkout_system::*;
pub use config::*;
pub use self::tracing::*;
