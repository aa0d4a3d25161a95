//! Error types for the stencil library.

use thiserror::Error;

/// Error type for stencil operations.
///
/// Formatting itself never fails: templates substitute empty strings for
/// missing formatters, and every option combination produces output. The
/// only fallible surface is turning option text (from a CLI flag or a config
/// file) into one of the closed option enums.
#[derive(Error, Debug)]
pub enum StencilError {
    /// An option string did not name a known value
    #[error("Invalid value for option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },
}

impl StencilError {
    /// Creates an invalid option error for a rejected value.
    pub(crate) fn invalid_option(option: &str, value: &str, expected: &str) -> Self {
        StencilError::InvalidOption {
            option: option.to_string(),
            reason: format!("'{value}' is not one of {expected}"),
        }
    }
}

/// Result type alias for stencil operations
pub type Result<T> = std::result::Result<T, StencilError>;
