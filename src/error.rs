//! Error codes and the top-level CLI error.
//!
//! DESIGN
//! ======
//! Each layer keeps its own `thiserror` enum. [`ErrorCode`] gives every one
//! of them a stable `E_*` code for logs and a `retryable` hint. Nothing
//! retries automatically; the hint only shapes the message a user sees.

use finder::FinderError;
use widgets::{StoreError, WidgetError};

use crate::config::ConfigError;
use crate::locate::LocateError;
use crate::services::print::PrintError;

/// Trait for error types that carry a grepable code.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

impl ErrorCode for FinderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRadius(_) => "E_INVALID_RADIUS",
            Self::InvalidCoordinate { .. } => "E_INVALID_COORDINATE",
            Self::EmptyQuery => "E_EMPTY_QUERY",
            Self::NoSuchResult(_) => "E_NO_SUCH_RESULT",
        }
    }
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        StoreError::error_code(self)
    }
}

impl ErrorCode for WidgetError {
    fn error_code(&self) -> &'static str {
        WidgetError::error_code(self)
    }
}

// =============================================================================
// CLI ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Finder(#[from] FinderError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Widget(#[from] WidgetError),
    #[error(transparent)]
    Print(#[from] PrintError),
    #[error("{0}")]
    Search(String),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Locate(e) => e.error_code(),
            Self::Finder(e) => ErrorCode::error_code(e),
            Self::Store(e) => StoreError::error_code(e),
            Self::Widget(e) => WidgetError::error_code(e),
            Self::Print(e) => e.error_code(),
            Self::Search(_) => "E_SEARCH_FAILED",
            Self::Json(_) => "E_OUTPUT_ENCODE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Locate(e) => e.retryable(),
            _ => false,
        }
    }
}

impl CliError {
    /// Process exit status: 2 for bad input, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Finder(_) | Self::Widget(WidgetError::Empty { .. } | WidgetError::Invalid { .. }) => 2,
            _ => 1,
        }
    }
}
