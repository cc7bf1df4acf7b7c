use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected roster requests. Every variant is a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("Participant {participant} not found in {activity}")]
    ParticipantNotFound {
        activity: String,
        participant: String,
    },

    #[error("Participant {participant} already enrolled in {activity}")]
    AlreadyEnrolled {
        activity: String,
        participant: String,
    },

    #[error("Missing query parameter: email")]
    MissingEmail,

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::ActivityNotFound(_) | RosterError::ParticipantNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            RosterError::AlreadyEnrolled { .. } => StatusCode::BAD_REQUEST,
            RosterError::MissingEmail | RosterError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// Fixed client-facing message. Does not echo the request.
    pub fn detail(&self) -> &'static str {
        match self {
            RosterError::ActivityNotFound(_) => "Activity not found",
            RosterError::ParticipantNotFound { .. } => "Participant not found in this activity",
            RosterError::AlreadyEnrolled { .. } => "Student already signed up for this activity",
            RosterError::MissingEmail => "Missing query parameter: email",
            RosterError::InvalidQuery(_) => "Invalid query string",
        }
    }
}

/// Body of every failed roster request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Participant {participant} listed twice in {activity}")]
    DuplicateParticipant {
        activity: String,
        participant: String,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
