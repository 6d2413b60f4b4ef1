//! Error types for the API client and the command handlers

use thiserror::Error;

/// Everything that can go wrong talking to the inventory server
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    #[error("HTTP {status} Error. Response: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    UnexpectedShape(&'static str),

    /// The server answered with `{"message": ...}` in place of a record
    #[error("{0}")]
    NotFound(String),

    /// A value computed from server data does not fit its field
    #[error("{0}")]
    OutOfRange(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        let msg = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            format!("Request failed: {}", e)
        };
        ApiError::Transport(msg)
    }
}

/// Precondition failures caught before any request is made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("No item selected!")]
    NoSelection,

    #[error("Could not parse item ID")]
    InvalidItemId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_text() {
        let err = ApiError::Status {
            status: 503,
            body: r#"{"message":"Unable to create item"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains(r#"{"message":"Unable to create item"}"#));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_not_found_is_verbatim() {
        let err = ApiError::NotFound("Item not found".into());
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.status(), None);
    }
}
