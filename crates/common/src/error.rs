//! Common error types and handling for Vendora

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Vendora application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Duplicate delivery report: {0}")]
    DuplicateReport(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the error code for caller-facing surfaces
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::UnresolvedReference(_) => "UNRESOLVED_REFERENCE",
            Error::DuplicateReport(_) => "DUPLICATE_REPORT",
            Error::Export(_) => "EXPORT_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can recover by correcting its input or refreshing
    /// its view. Every error in this module is local to the failed call;
    /// only `Unexpected` and `Internal` indicate a programming fault.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Unexpected(_) | Error::Internal(_))
    }
}
