//! Event resolution seam between the host application and the exports

use crate::{Event, EventId, EventModelError, EventModelResult};
use std::collections::HashMap;

/// Resolves event ids to events.
///
/// The host application implements this against its own domain model; the
/// exports only ever read through it.
pub trait EventStore {
    /// Look up an event by id
    fn event(&self, id: EventId) -> EventModelResult<&Event>;
}

/// In-memory store, used by tests and by hosts that already hold their
/// events in memory.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: HashMap<EventId, Event>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event under the given id, replacing any previous entry
    pub fn insert(&mut self, id: EventId, event: Event) {
        self.events.insert(id, event);
    }
}

impl EventStore for MemoryEventStore {
    fn event(&self, id: EventId) -> EventModelResult<&Event> {
        self.events
            .get(&id)
            .ok_or(EventModelError::EventNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_event_is_an_error() {
        let store = MemoryEventStore::new();
        assert!(matches!(
            store.event(EventId(7)),
            Err(EventModelError::EventNotFound(EventId(7)))
        ));
    }

    #[test]
    fn inserted_event_resolves() {
        let mut store = MemoryEventStore::new();
        store.insert(EventId(1), Event::new("Семинар"));
        assert_eq!(store.event(EventId(1)).unwrap().title, "Семинар");
    }
}
