use super::{RosterError, RosterRepository};
use crate::model::{mergington_catalog, Activity, Catalog, Enrollment};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// In-memory roster store.
///
/// The set of activities is fixed at construction, so the name index is
/// immutable and only each roster is locked. Operations on different
/// activities never contend.
pub struct MemoryStorage {
    activities: Vec<(String, RwLock<Activity>)>,
    index: HashMap<String, usize>,
}

impl MemoryStorage {
    pub fn new(catalog: Catalog) -> Self {
        let mut activities = Vec::with_capacity(catalog.len());
        let mut index = HashMap::with_capacity(catalog.len());
        for (name, activity) in catalog {
            index.insert(name.clone(), activities.len());
            activities.push((name, RwLock::new(activity)));
        }
        MemoryStorage { activities, index }
    }

    fn roster(&self, activity: &str) -> Result<&RwLock<Activity>, RosterError> {
        self.index
            .get(activity)
            .map(|&i| &self.activities[i].1)
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(mergington_catalog())
    }
}

#[async_trait]
impl RosterRepository for MemoryStorage {
    #[instrument(skip(self))]
    async fn list_activities(&self) -> Catalog {
        let mut entries = Vec::with_capacity(self.activities.len());
        for (name, roster) in &self.activities {
            entries.push((name.clone(), roster.read().await.clone()));
        }
        let catalog: Catalog = entries.into_iter().collect();
        debug!(activity_count = catalog.len(), "Listed activities");
        catalog
    }

    #[instrument(skip(self))]
    async fn enroll(&self, activity: &str, participant: &str) -> Result<Enrollment, RosterError> {
        debug!("Enrolling participant");
        let roster = self.roster(activity).inspect_err(|_| {
            warn!("Enroll rejected: unknown activity");
        })?;

        let mut roster = roster.write().await;
        if roster.is_enrolled(participant) {
            warn!("Enroll rejected: already enrolled");
            return Err(RosterError::AlreadyEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }
        roster.participants.push(participant.to_string());

        if roster.is_over_capacity() {
            warn!(
                participants = roster.participants.len(),
                max_participants = roster.max_participants,
                "Activity is over capacity"
            );
        }
        debug!(participants = roster.participants.len(), "Participant enrolled");
        Ok(Enrollment::new(activity, participant))
    }

    #[instrument(skip(self))]
    async fn unenroll(
        &self,
        activity: &str,
        participant: &str,
    ) -> Result<Enrollment, RosterError> {
        debug!("Unenrolling participant");
        let roster = self.roster(activity).inspect_err(|_| {
            warn!("Unenroll rejected: unknown activity");
        })?;

        let mut roster = roster.write().await;
        let Some(position) = roster.participants.iter().position(|p| p == participant) else {
            warn!("Unenroll rejected: not a participant");
            return Err(RosterError::ParticipantNotFound {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        };
        roster.participants.remove(position);

        debug!(participants = roster.participants.len(), "Participant unenrolled");
        Ok(Enrollment::new(activity, participant))
    }
}
