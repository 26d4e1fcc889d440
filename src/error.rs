//! Error types for the SR201 client

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("relay error: {0}")]
    Relay(#[from] RelayError),
}

/// Errors related to relay board communication
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("connection lost")]
    ConnectionLost,

    #[error("not connected")]
    NotConnected,

    #[error("command error: {0}")]
    Command(String),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("timeout waiting for response")]
    Timeout,

    #[error("failed to check relay status: {source}")]
    StatusFailed { source: Box<RelayError> },

    #[error("failed to open relay {relay}: {source}")]
    OpenFailed { relay: u8, source: Box<RelayError> },

    #[error("failed to close relay {relay}: {source}")]
    CloseFailed { relay: u8, source: Box<RelayError> },

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
