use serde::{Deserialize, Serialize};

/// An extracurricular offering and its current roster.
///
/// The activity name is not stored here: it is the key under which the
/// activity lives in a [`Catalog`](crate::model::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational capacity. Enrollment is not capped by it.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_enrolled(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }

    /// Returns the first identifier that appears more than once, if any.
    pub fn duplicate_participant(&self) -> Option<&str> {
        self.participants
            .iter()
            .enumerate()
            .find(|(i, p)| self.participants[..*i].contains(*p))
            .map(|(_, p)| p.as_str())
    }
}
