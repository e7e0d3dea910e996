use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::backend::RecognizerBackend;
use super::mock::MockRecognizer;
use crate::error::{Error, Result};

/// Which recognizer backend the controller should own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Scripted backend, available everywhere
    Mock,
    /// The platform's built-in recognition engine
    System,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mock" => Ok(BackendKind::Mock),
            "system" => Ok(BackendKind::System),
            other => Err(Error::generic(format!("unknown backend kind: {other:?}"))),
        }
    }
}

/// Recognizer backend factory
pub struct RecognizerFactory;

impl RecognizerFactory {
    /// Create a recognizer backend based on kind and platform.
    pub fn create(kind: BackendKind) -> Result<Box<dyn RecognizerBackend>> {
        match kind {
            BackendKind::Mock => Ok(Box::new(MockRecognizer::demo())),
            // Native bridges register here per target OS; none is wired up
            // on the targets this crate currently builds for.
            BackendKind::System => Err(Error::NotAvailable),
        }
    }
}
