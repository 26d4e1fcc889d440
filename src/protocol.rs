//! SR201 wire protocol
//!
//! Command formatting and response handling for the board's plaintext
//! control protocol: one short ASCII command per write, one reply per read.

use std::fmt;
use std::str::FromStr;

use crate::error::RelayError;

/// Command that queries the state of the board's channels
pub const STATUS_COMMAND: &str = "00";

/// Command prefix that closes (energizes) a relay channel
const CLOSE_PREFIX: &str = "1";

/// Command prefix that opens (releases) a relay channel
const OPEN_PREFIX: &str = "2";

/// Action dispatched by [`Sr201Client::execute`](crate::Sr201Client::execute)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Query channel status
    Status,
    /// Open the configured relay channel
    Open,
    /// Close the configured relay channel
    Close,
}

impl FromStr for Action {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Action::Status),
            "open" => Ok(Action::Open),
            "close" => Ok(Action::Close),
            other => Err(RelayError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Status => write!(f, "status"),
            Action::Open => write!(f, "open"),
            Action::Close => write!(f, "close"),
        }
    }
}

/// Format the command that opens `relay`
pub fn open_command(relay: u8) -> String {
    format!("{}{}", OPEN_PREFIX, relay)
}

/// Format the command that closes `relay`
pub fn close_command(relay: u8) -> String {
    format!("{}{}", CLOSE_PREFIX, relay)
}

/// Decode a raw reply buffer into trimmed text
///
/// Replies are ASCII on stock firmware, but the decode is lossy so a
/// stray byte cannot poison the whole response.
pub fn trim_response(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}

/// Validate that a command string is safe to send
pub fn validate_command(cmd: &str) -> Result<(), RelayError> {
    if cmd.is_empty() {
        return Err(RelayError::Command("empty command".to_string()));
    }
    // Commands shouldn't contain control characters
    if cmd.chars().any(|c| c.is_control()) {
        return Err(RelayError::Command(
            "command contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_command() {
        assert_eq!(open_command(3), "23");
        assert_eq!(open_command(0), "20");
    }

    #[test]
    fn test_close_command() {
        assert_eq!(close_command(3), "13");
        assert_eq!(close_command(8), "18");
    }

    #[test]
    fn test_trim_response() {
        assert_eq!(trim_response(b"  OK\n"), "OK");
        assert_eq!(trim_response(b"00000000\r\n"), "00000000");
        assert_eq!(trim_response(b""), "");
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("status".parse::<Action>().unwrap(), Action::Status);
        assert_eq!("open".parse::<Action>().unwrap(), Action::Open);
        assert_eq!("close".parse::<Action>().unwrap(), Action::Close);
    }

    #[test]
    fn test_action_parse_unknown() {
        let err = "bogus".parse::<Action>().unwrap_err();
        assert!(matches!(err, RelayError::UnknownAction(ref a) if a == "bogus"));
    }

    #[test]
    fn test_validate_command() {
        assert!(validate_command("00").is_ok());
        assert!(validate_command("23").is_ok());
        assert!(validate_command("").is_err());
        assert!(validate_command("0\n0").is_err());
    }
}
