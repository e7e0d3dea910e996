use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the session controller and its operations.
///
/// Mid-session platform failures (no-match, busy, timeout, ...) are not
/// represented here; those arrive as `onSpeechError` events with a numeric
/// code. This enum covers the operations themselves.
#[derive(Debug, Error)]
pub enum Error {
    #[error("audio recording permission not granted")]
    PermissionDenied,

    #[error("speech recognition is not available on this device")]
    NotAvailable,

    #[error("speech recognition already in progress")]
    AlreadyListening,

    #[error("error setting language: {0}")]
    Language(String),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    /// Stable machine-readable code, mirroring the module's wire contract.
    pub fn code(&self) -> &'static str {
        match self {
            Error::PermissionDenied => "PERMISSION_DENIED",
            Error::NotAvailable => "NOT_AVAILABLE",
            Error::AlreadyListening => "ALREADY_LISTENING",
            Error::Language(_) => "LANGUAGE_ERROR",
            Error::Generic(_) => "ERROR",
        }
    }

    pub(crate) fn generic(message: impl Into<String>) -> Self {
        Error::Generic(message.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Generic(format!("{err:#}"))
    }
}
