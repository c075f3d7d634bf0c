//! swatch - terminal stopwatch
//!
//! A full-screen stopwatch driven by single-key commands, with a plain
//! clock face and a decorative orbit scene.

use std::fmt;

pub mod app;
pub mod config;
pub mod logging;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum SwatchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Terminal mode could not be entered or restored
    TerminalError(String),
    /// Configuration validation error
    ConfigError(String),
    /// Drawing the display failed
    RenderError(String),
}

impl fmt::Display for SwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchError::IoError(err) => write!(f, "I/O error: {}", err),
            SwatchError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
            SwatchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SwatchError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for SwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwatchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SwatchError {
    fn from(err: std::io::Error) -> Self {
        SwatchError::IoError(err)
    }
}

/// Result type alias for swatch operations
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Error handling utilities
pub mod error {
    use super::SwatchError;

    /// Convert error to a message suitable for stderr after the terminal is restored
    pub fn user_friendly_message(error: &SwatchError) -> String {
        match error {
            SwatchError::TerminalError(msg) => {
                format!("Could not set up the terminal ({}). Is this an interactive terminal?", msg)
            }
            SwatchError::IoError(err) => {
                format!("Could not access standard input/output: {}", err)
            }
            SwatchError::ConfigError(msg) => format!("Invalid settings: {}", msg),
            SwatchError::RenderError(_) => error.to_string(),
        }
    }
}

// Common constants
pub const APP_NAME: &str = "swatch";
/// Default tick length; bounds input latency and the redraw rate (~20 Hz).
pub const DEFAULT_TICK_MS: u64 = 50;
