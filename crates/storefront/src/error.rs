//! Unified error handling.
//!
//! Cart and navigation failures are absorbed inside the session (see
//! [`crate::navigation`]). `AppError` covers what can stop the binary:
//! bad configuration, unusable terminal I/O, template failures, and invalid
//! command-line input.

use thiserror::Error;

use crate::config::ConfigError;
use crate::views::UnknownPage;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Page requested on the command line doesn't exist.
    #[error("Bad request: {0}")]
    UnknownPage(#[from] UnknownPage),

    /// Terminal or snapshot file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
