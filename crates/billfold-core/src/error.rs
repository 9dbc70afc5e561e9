//! Error types for the billfold-core library.

use thiserror::Error;

/// Main error type for the billfold library.
///
/// Field extraction itself is a total function and never produces an
/// error; these variants cover the recognition boundary and file I/O.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Upstream recognition error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by the text-recognition collaborators.
///
/// The orchestrator intercepts these and converts them into a
/// fully-defaulted receipt; they are never surfaced to its callers.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The recognition engine itself failed.
    #[error("recognition engine failed: {0}")]
    Engine(String),

    /// The engine ran but produced no text.
    #[error("no text recognized")]
    NoText,

    /// The input could not be handed to the engine.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Result type for the billfold library.
pub type Result<T> = std::result::Result<T, ScanError>;
