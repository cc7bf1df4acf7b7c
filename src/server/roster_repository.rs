use super::RosterError;
use crate::model::{Catalog, Enrollment};
use async_trait::async_trait;

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Snapshot of every activity and its current participants.
    async fn list_activities(&self) -> Catalog;

    async fn enroll(&self, activity: &str, participant: &str) -> Result<Enrollment, RosterError>;

    async fn unenroll(&self, activity: &str, participant: &str)
        -> Result<Enrollment, RosterError>;
}
