//! Events - the top-level container the host resolves by id

use crate::Contribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the host uses to look up an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A conference event with its contributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub contributions: Vec<Contribution>,
}

impl Event {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contributions: Vec::new(),
        }
    }

    /// Add a contribution
    pub fn with_contribution(mut self, contribution: Contribution) -> Self {
        self.contributions.push(contribution);
        self
    }

    /// Contributions that are not soft-deleted, in host order
    pub fn live_contributions(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions.iter().filter(|c| !c.is_deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_contributions_skip_deleted() {
        let mut deleted = Contribution::new("Gone");
        deleted.is_deleted = true;

        let event = Event::new("Конференция")
            .with_contribution(Contribution::new("Kept"))
            .with_contribution(deleted);

        assert_eq!(event.live_contributions().count(), 1);
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = Event::new("Семинар").with_contribution(Contribution::new("Доклад"));
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Семинар");
        assert_eq!(back.contributions.len(), 1);
    }
}
