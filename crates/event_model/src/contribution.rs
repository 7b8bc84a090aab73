//! Contributions - talks and submissions within an event

use crate::{PaperRevision, Person, PersonLink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A talk or submission within a conference event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    /// Talk title; the host may leave this unset
    pub title: Option<String>,
    /// Scheduled start; unset for contributions not yet on the timetable
    pub start_dt: Option<DateTime<Utc>>,
    /// Soft-deletion flag maintained by the host
    pub is_deleted: bool,
    /// Persons associated with this contribution
    pub person_links: Vec<PersonLink>,
    /// The paper revision approved for publication, if any
    pub accepted_paper_revision: Option<PaperRevision>,
}

impl Contribution {
    /// Create a contribution with a title and no schedule slot
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            start_dt: None,
            is_deleted: false,
            person_links: Vec::new(),
            accepted_paper_revision: None,
        }
    }

    /// Create a contribution with no title
    pub fn untitled() -> Self {
        Self {
            title: None,
            start_dt: None,
            is_deleted: false,
            person_links: Vec::new(),
            accepted_paper_revision: None,
        }
    }

    /// Set the scheduled start
    pub fn with_start(mut self, start_dt: DateTime<Utc>) -> Self {
        self.start_dt = Some(start_dt);
        self
    }

    /// Add a person link
    pub fn with_link(mut self, link: PersonLink) -> Self {
        self.person_links.push(link);
        self
    }

    /// Attach an accepted paper revision
    pub fn with_paper(mut self, revision: PaperRevision) -> Self {
        self.accepted_paper_revision = Some(revision);
        self
    }

    /// Persons linked with the speaker role, in link order
    pub fn speakers(&self) -> impl Iterator<Item = &Person> {
        self.person_links
            .iter()
            .filter(|link| link.is_speaker)
            .map(|link| &link.person)
    }

    /// Whether this contribution has a paper revision approved for
    /// publication
    pub fn has_accepted_paper(&self) -> bool {
        self.accepted_paper_revision
            .as_ref()
            .is_some_and(|rev| rev.is_accepted())
    }
}
