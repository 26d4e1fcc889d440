//! SR201 TCP client
//!
//! Owns a single connection to the relay board and performs one
//! command/response exchange at a time.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::config::{Config, Transport};
use crate::error::RelayError;
use crate::protocol::{
    close_command, open_command, trim_response, validate_command, Action, STATUS_COMMAND,
};

/// Default TCP control port of SR201 boards
pub const DEFAULT_PORT: u16 = 6722;

/// Connection timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read timeout for responses
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Size of the response read buffer
const RESPONSE_BUFFER_SIZE: usize = 4096;

/// SR201 client owning a single connection
///
/// Methods take `&mut self`: the board answers one command at a time, so
/// exclusive access is part of the contract. Callers that share a client
/// across tasks must wrap it in their own mutual exclusion.
#[derive(Debug)]
pub struct Sr201Client {
    host: String,
    port: u16,
    transport: Transport,
    relay: u8,
    timeout: Duration,
    stream: Option<TcpStream>,
}

impl Sr201Client {
    /// Connect to the relay board described by `config`
    ///
    /// Dialing is bounded by a 5 second deadline; both a refused dial and
    /// an elapsed deadline surface as [`RelayError::ConnectionFailed`].
    pub async fn connect(config: &Config) -> Result<Self, RelayError> {
        let addr = config.addr();
        info!("Connecting to SR201 at {} over {}", addr, config.transport);

        let stream = match config.transport {
            Transport::Tcp => timeout(CONNECT_TIMEOUT, TcpStream::connect(&addr))
                .await
                .map_err(|_| RelayError::ConnectionFailed("connection timeout".to_string()))?
                .map_err(|e| RelayError::ConnectionFailed(e.to_string()))?,
        };

        Ok(Self {
            host: config.host.clone(),
            port: config.port,
            transport: config.transport,
            relay: config.relay,
            timeout: READ_TIMEOUT,
            stream: Some(stream),
        })
    }

    /// The relay channel this client addresses
    pub fn relay(&self) -> u8 {
        self.relay
    }

    /// The transport the connection was dialed over
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Close the connection to the board
    ///
    /// Idempotent: closing an already-closed client succeeds trivially.
    pub async fn close(&mut self) -> Result<(), RelayError> {
        if let Some(mut stream) = self.stream.take() {
            debug!("Closing connection to {}:{}", self.host, self.port);
            stream.shutdown().await?;
        }
        Ok(())
    }

    /// Send a raw command and wait for the board's reply
    ///
    /// Performs exactly one write followed by one read into a fixed
    /// buffer. The read deadline is re-armed on every call; the write is
    /// not bounded. The reply is returned with surrounding whitespace
    /// trimmed.
    pub async fn send(&mut self, command: &str) -> Result<String, RelayError> {
        validate_command(command)?;
        let stream = self.stream.as_mut().ok_or(RelayError::NotConnected)?;

        debug!("Sending command: {}", command);
        stream.write_all(command.as_bytes()).await.map_err(|e| {
            error!("Failed to send command: {}", e);
            RelayError::Write(e)
        })?;
        stream.flush().await.map_err(RelayError::Write)?;

        let mut buffer = vec![0u8; RESPONSE_BUFFER_SIZE];
        let n = match timeout(self.timeout, stream.read(&mut buffer)).await {
            Ok(Ok(0)) => return Err(RelayError::ConnectionLost),
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(RelayError::Read(e)),
            Err(_) => return Err(RelayError::Timeout),
        };

        let response = trim_response(&buffer[..n]);
        debug!("Received response: {}", response);
        Ok(response)
    }

    /// Query the state of the board's channels
    ///
    /// The reply format is firmware-defined; it is returned as an opaque
    /// trimmed string.
    pub async fn check_status(&mut self) -> Result<String, RelayError> {
        self.send(STATUS_COMMAND).await
    }

    /// Open the configured relay channel
    pub async fn open_relay(&mut self) -> Result<(), RelayError> {
        let command = open_command(self.relay);
        self.send(&command)
            .await
            .map_err(|source| RelayError::OpenFailed {
                relay: self.relay,
                source: Box::new(source),
            })?;
        Ok(())
    }

    /// Close the configured relay channel
    pub async fn close_relay(&mut self) -> Result<(), RelayError> {
        let command = close_command(self.relay);
        self.send(&command)
            .await
            .map_err(|source| RelayError::CloseFailed {
                relay: self.relay,
                source: Box::new(source),
            })?;
        Ok(())
    }

    /// Execute an action and report the outcome
    ///
    /// Returns the human-readable outcome message, which is also logged
    /// at info level.
    pub async fn execute(&mut self, action: Action) -> Result<String, RelayError> {
        let message = match action {
            Action::Status => {
                let status =
                    self.check_status()
                        .await
                        .map_err(|source| RelayError::StatusFailed {
                            source: Box::new(source),
                        })?;
                format!("Relay status: {}", status)
            }
            Action::Open => {
                self.open_relay().await?;
                format!("Relay {} opened.", self.relay)
            }
            Action::Close => {
                self.close_relay().await?;
                format!("Relay {} closed.", self.relay)
            }
        };
        info!("{}", message);
        Ok(message)
    }
}
