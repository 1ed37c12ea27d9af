//! Error types for Craftstall.
//!
//! Library crates use [`CraftstallError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all Craftstall operations.
#[derive(Debug, thiserror::Error)]
pub enum CraftstallError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Inventory store error (read, write, or atomic replace).
    #[error("inventory error: {0}")]
    Inventory(String),

    /// Malformed inventory document. The file exists but cannot be
    /// understood, so the store refuses to touch it.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Data validation error (empty title, negative price, bad selection).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Website rendering or output error.
    #[error("render error: {0}")]
    Render(String),

    /// Flyer/icon drawing error.
    #[error("artwork error: {0}")]
    Artwork(String),

    /// Image import or format conversion error.
    #[error("imaging error: {0}")]
    Imaging(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CraftstallError>;

impl CraftstallError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = CraftstallError::config("missing shop name");
        assert_eq!(err.to_string(), "config error: missing shop name");

        let err = CraftstallError::validation("price must not be negative");
        assert!(err.to_string().contains("price must not be negative"));
    }

    #[test]
    fn io_error_carries_path() {
        let err = CraftstallError::io(
            "/tmp/inventory.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("inventory.json"));
    }
}
