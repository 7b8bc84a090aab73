//! Paper revisions and their review states

use serde::{Deserialize, Serialize};

/// Review state of a paper revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperRevisionState {
    /// Submitted, awaiting review
    Submitted,
    /// Sent back to the submitter for changes
    NeedsSubmitterChanges,
    /// Passed review, approved for publication
    Accepted,
    /// Rejected by review
    Rejected,
}

/// A revision of a submitted paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRevision {
    pub state: PaperRevisionState,
}

impl PaperRevision {
    pub fn new(state: PaperRevisionState) -> Self {
        Self { state }
    }

    /// Whether this revision is approved for publication
    pub fn is_accepted(&self) -> bool {
        self.state == PaperRevisionState::Accepted
    }
}
