//! Minimal element tree with the click-counter demo page.

pub mod element;
pub mod counter;
pub mod app;

pub use element::*;
pub use counter::*;
pub use app::*;
