use thiserror::Error;

use crate::policy::Action;
use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, HostelError>;

/// Errors surfaced by repositories, the credential store and gated operations.
///
/// None of them is fatal to the process; each one ends only the current
/// request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HostelError {
    #[error("Already exists: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not allowed to {0}")]
    Unauthorized(Action),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for HostelError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey {
                collection,
                field,
                value,
            } => HostelError::DuplicateKey(format!("{collection}.{field} = {value}")),
            StoreError::NotFound { collection, key } => {
                HostelError::NotFound(format!("{collection}/{key}"))
            }
            other => HostelError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for HostelError {
    fn from(e: serde_json::Error) -> Self {
        HostelError::Storage(format!("Document codec failed: {e}"))
    }
}
