//! Cloneable handles for the actors. Each method sends one typed request and
//! waits for the reply.

#[macro_use]
mod macros;

pub mod api_client;
pub mod browser_client;

pub use api_client::*;
pub use browser_client::*;
