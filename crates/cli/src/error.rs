//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (wrong value count, bad dimensions, bad sample step)
//! - 11: I/O error (image read, plane write)
//! - 12: input error (unknown model, bad hex color, unparseable value)
//! - 13: serialization error
//!
//! Library errors that only arise from what the user typed (an unknown model
//! name or a malformed color string) are reported as input errors, not as
//! color errors.

use chromatic_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A library-level error other than I/O.
    Color(ColorError),
    /// An I/O error (image decode, plane write).
    Io(String),
    /// A user input error (unknown model name, value that is not a number).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            e @ (ColorError::UnknownModel(_) | ColorError::InvalidColor(_)) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
