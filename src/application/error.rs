use thiserror::Error;

#[derive(Error, Debug)]
pub enum LnClientError {
    #[error("Request to bark failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Bark API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode bark response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode bark request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Not supported")]
    NotSupported,

    #[error("Unknown custom node command: {0}")]
    UnknownCustomNodeCommand(String),
}

impl LnClientError {
    pub fn is_not_supported(&self) -> bool {
        matches!(self, LnClientError::NotSupported)
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            LnClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = LnClientError> = std::result::Result<T, E>;
