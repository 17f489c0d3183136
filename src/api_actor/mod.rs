//! Remote order API: coupon lookup and order creation over HTTP.

mod actor;
pub mod error;

pub use actor::*;
pub use error::*;
