//! Configuration module for the SR201 client
//!
//! Strongly-typed connection settings, validated at construction.

use std::fmt;
use std::str::FromStr;

/// Transport used to reach the relay board
///
/// The SR201 control protocol runs over TCP; the set of transports is
/// closed so an unsupported identifier is rejected before dialing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Plain TCP stream
    Tcp,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Transport::Tcp),
            other => Err(ConfigError::UnsupportedTransport(other.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Tcp => write!(f, "tcp"),
        }
    }
}

/// Connection settings for one relay board
///
/// Built once via [`Config::new`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Board hostname or IP address
    pub host: String,
    /// TCP control port
    pub port: u16,
    /// Transport used to reach the board
    pub transport: Transport,
    /// Relay channel addressed by open/close commands
    ///
    /// Not validated against the board's channel count; the board
    /// answers out-of-range channels itself.
    pub relay: u8,
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required field: {0}")]
    MissingRequired(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("unsupported transport: {0}")]
    UnsupportedTransport(String),
}

impl Config {
    /// Build a validated configuration for a TCP board
    pub fn new(host: impl Into<String>, port: u16, relay: u8) -> Result<Self, ConfigError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(ConfigError::MissingRequired("host"));
        }
        if port == 0 {
            return Err(ConfigError::InvalidValue("port", port.to_string()));
        }
        Ok(Config {
            host,
            port,
            transport: Transport::Tcp,
            relay,
        })
    }

    /// Replace the transport, keeping everything else
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// The `host:port` pair in dialing form
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
