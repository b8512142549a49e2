pub mod config;
pub mod gui;
pub mod init;
pub mod list;
