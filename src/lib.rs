//! # sr201
//!
//! TCP client for SR201 network relay boards.
//!
//! The SR201 speaks a plaintext control protocol: each exchange is one
//! short ASCII command answered by one reply. `00` queries channel
//! status, `1<n>` closes channel `n`, `2<n>` opens it. The client owns a
//! single connection with a 5 second deadline on connects and on every
//! response read; there is no reconnection, retry, or pipelining.
//!
//! ## Quick start
//!
//! ```no_run
//! use sr201::{Action, Config, Sr201Client};
//!
//! #[tokio::main]
//! async fn main() -> sr201::Result<()> {
//!     let config = Config::new("192.168.1.100", sr201::DEFAULT_PORT, 3)?;
//!     let mut client = Sr201Client::connect(&config).await?;
//!
//!     println!("{}", client.execute(Action::Open).await?);
//!     println!("status: {}", client.check_status().await?);
//!
//!     client.close().await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod protocol;

pub use client::{Sr201Client, DEFAULT_PORT};
pub use config::{Config, ConfigError, Transport};
pub use error::{Error, RelayError, Result};
pub use protocol::Action;
