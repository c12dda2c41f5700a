use thiserror::Error;

use crate::form::FieldErrors;
use crate::store::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both email and password.")]
    MissingFields,

    #[error("Invalid credentials. Please check your email and password.")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file could not be accessed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(
        "{} field(s) failed validation: {}",
        .0.len(),
        .0.keys().collect::<Vec<_>>().join(", ")
    )]
    Invalid(FieldErrors),

    #[error("a submission is already in progress")]
    InFlight,
}
