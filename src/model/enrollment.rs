/// Confirmation of a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub participant: String,
}

impl Enrollment {
    pub fn new(activity: &str, participant: &str) -> Self {
        Enrollment {
            activity: activity.to_string(),
            participant: participant.to_string(),
        }
    }
}
