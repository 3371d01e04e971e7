use thiserror::Error;

/// Shown when a failed mutation carries no usable `detail`.
pub const FALLBACK_ERROR_TEXT: &str = "An error occurred";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Invalid data received: {0}")]
    InvalidData(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Request rejected with status {status}")]
    Application { status: u16, detail: Option<String> },
}

impl RosterError {
    /// Text for the status message when the server rejected a request.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            RosterError::Application { detail, .. } => {
                Some(detail.as_deref().unwrap_or(FALLBACK_ERROR_TEXT))
            }
            _ => None,
        }
    }
}
