pub mod clock;
pub mod config;
pub mod controller;

pub use clock::{Clock, LocalClock};
pub use controller::Controller;
