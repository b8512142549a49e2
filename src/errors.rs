//! Unified application error type.
//! All modules (store, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session log file
    // ---------------------------
    #[error("Session log error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Window
    // ---------------------------
    #[error("Window error: {0}")]
    Gui(String),
}

pub type AppResult<T> = Result<T, AppError>;
