//! Unified application error type.
//! The core itself never fails on configuration content; errors come from
//! malformed input at the edges (config files, CLI arguments, host lookups).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Format spec
    // ---------------------------
    #[error("No time input format configured")]
    EmptyFormats,

    #[error("Invalid time format pattern: {0}")]
    InvalidFormat(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid shortcut code: {0}")]
    InvalidCode(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Host / widget
    // ---------------------------
    #[error("No target field for slot {0}")]
    InvalidSlot(usize),

    #[error("No shortcut entry at index {0}")]
    InvalidEntry(usize),
}

pub type AppResult<T> = Result<T, AppError>;
