pub mod clock_state;
pub mod session_entry;

pub use clock_state::{ClockState, Controls};
pub use session_entry::{LegacyAction, SessionEntry};
