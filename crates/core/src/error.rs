//! Error types for sheetlink.

use thiserror::Error;

/// Result type for sheetlink operations.
pub type SheetsResult<T> = Result<T, SheetsError>;

/// Coarse classification of a [`SheetsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any remote call.
    Validation,
    /// A lookup against the remote spreadsheet found no match.
    NotFound,
    /// Reported by (or while talking to) the remote service.
    Remote,
}

/// Errors that can occur in sheetlink.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Neither the call nor the connection pins down both a sheet and a range.
    #[error("specify range or sheet in method or in connection setup")]
    AmbiguousAddress,

    /// Range expression is not a two-corner `<column><row>:<column><row>` form.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A sheet operation had no sheet name, no sheet id and no bound sheet.
    #[error("sheet name or sheet id must be provided")]
    MissingSheetReference,

    /// Both a sheet name and a sheet id were given.
    #[error("sheet name and sheet id cannot be provided at the same time")]
    ConflictingSheetReference,

    /// Unknown spelling for an option enum.
    #[error("invalid {option} value: {value}")]
    InvalidOption { option: &'static str, value: String },

    /// No sheet with this title exists in the spreadsheet.
    #[error("sheet: {name} not found")]
    SheetNotFound { name: String },

    /// No named range with this name exists in the spreadsheet.
    #[error("named range: {name} not found")]
    NamedRangeNotFound { name: String },

    /// The remote service answered with an error.
    #[error("remote error (status {status}): {message}")]
    Remote { status: u16, message: String },

    /// The request never got a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SheetsError {
    /// Create a remote error.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid-option error.
    pub fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            value: value.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AmbiguousAddress
            | Self::InvalidRange(_)
            | Self::MissingSheetReference
            | Self::ConflictingSheetReference
            | Self::InvalidOption { .. } => ErrorKind::Validation,
            Self::SheetNotFound { .. } | Self::NamedRangeNotFound { .. } => ErrorKind::NotFound,
            Self::Remote { .. } | Self::Transport(_) | Self::Json(_) => ErrorKind::Remote,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
