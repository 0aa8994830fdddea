use thiserror::Error;

/// Refusal to turn a selection into a bulk update request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no users selected")]
    EmptySelection,
}

/// Failure while loading a page of users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode page: {0}")]
    Decode(String),

    #[error("Invalid page request: {0}")]
    InvalidRequest(String),
}

/// Failure while applying a bulk or single-record update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode update response: {0}")]
    Decode(String),

    #[error("Update rejected: {0}")]
    Rejected(String),
}

impl From<roster_model::ModelError> for FetchError {
    fn from(err: roster_model::ModelError) -> Self {
        FetchError::InvalidRequest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SelectionError>;
