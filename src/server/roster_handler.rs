use super::{RosterError, RosterRepository};
use crate::model::Catalog;
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Body of every successful roster change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The `email` query parameter of a signup request.
///
/// A repeated `email` resolves to its last value. Rejections render as
/// JSON like every other roster error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupQuery {
    pub email: String,
}

impl SignupQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, RosterError> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, email)| SignupQuery { email })
            .ok_or(RosterError::MissingEmail)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SignupQuery
where
    S: Send + Sync,
{
    type Rejection = RosterError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RosterError::InvalidQuery(e.body_text()))?;
        Self::from_pairs(pairs)
    }
}

/// Translates HTTP-level requests into roster operations.
#[derive(Clone)]
pub struct RosterHandler {
    roster_repo: Arc<dyn RosterRepository>,
}

impl RosterHandler {
    pub fn new(roster_repo: Arc<dyn RosterRepository>) -> Self {
        RosterHandler { roster_repo }
    }

    pub async fn activities(&self) -> Catalog {
        self.roster_repo.list_activities().await
    }

    #[instrument(skip(self))]
    pub async fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, RosterError> {
        let enrollment = self.roster_repo.enroll(activity, email).await?;
        info!("Signed up {} for {}", enrollment.participant, enrollment.activity);
        Ok(MessageResponse {
            message: format!(
                "Signed up {} for {}",
                enrollment.participant, enrollment.activity
            ),
        })
    }

    #[instrument(skip(self))]
    pub async fn remove_participant(
        &self,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, RosterError> {
        let enrollment = self.roster_repo.unenroll(activity, email).await?;
        info!("Removed {} from {}", enrollment.participant, enrollment.activity);
        Ok(MessageResponse {
            message: format!(
                "Removed {} from {}",
                enrollment.participant, enrollment.activity
            ),
        })
    }
}
