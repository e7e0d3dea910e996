//! Recognizer backend seam.
//!
//! The platform speech engine is a black box behind [`RecognizerBackend`]:
//! the session controller asks it to (re)build its handle, start or stop a
//! listen session, and reads raw [`RecognizerNotice`] callbacks from a
//! channel. [`MockRecognizer`] replays scripted utterances for development
//! and tests.

pub mod backend;
pub mod factory;
pub mod mock;

pub use backend::{codes, Hypothesis, RecognizerBackend, RecognizerConfig, RecognizerNotice};
pub use factory::{BackendKind, RecognizerFactory};
pub use mock::MockRecognizer;
