//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// Only configuration and host setup can fail. Runtime problems such as a
/// missing page section degrade to "camera does not move" and are logged
/// instead.
#[derive(Debug)]
pub enum VantageError {
    /// A scroll position string could not be parsed or is used where it is
    /// not allowed (e.g. a relative `+=` offset as a segment start).
    InvalidScrollPosition(String),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Browser host failure (missing window, document, ...).
    Web(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScrollPosition(msg) => {
                write!(f, "invalid scroll position: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Web(msg) => write!(f, "web host error: {msg}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
