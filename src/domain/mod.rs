pub mod order;
pub mod coupon;
pub mod payment;

pub use order::*;
pub use coupon::*;
pub use payment::*;
