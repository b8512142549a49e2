pub mod messages;
#[cfg(feature = "gui")]
pub mod window;
