//! Error types for the input layer.

use thiserror::Error;

/// Result type alias for frameinput operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the input layer.
///
/// Most device failures never reach this type: an unopenable controller is
/// simply inactive and an unknown key is dropped. Only backend start-up and
/// recording I/O report errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend failed to initialise a subsystem (e.g. controller support).
    #[error("failed to initialise backend: {0}")]
    BackendInit(String),

    /// A device index does not refer to a device the backend knows about.
    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The requested feature is not supported by this backend.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a recording failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Other errors.
    #[error("{0}")]
    Other(String),
}
