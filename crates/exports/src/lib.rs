//! Exports - conference event metadata as DOCX documents
//!
//! Three entry points, one per report type, each resolving an event through
//! the host's [`EventStore`], rendering the document body in a single
//! linear pass, applying the uniform report styling, and serializing the
//! result to an in-memory DOCX byte buffer for the caller (typically an
//! HTTP handler) to return.

mod error;
pub mod publications;
pub mod render;
pub mod ru_date;
pub mod schedule;
pub mod session_report;
pub mod status;
pub mod styling;
pub mod talk_list;

pub use error::{ExportError, ExportResult};

use event_model::{Event, EventId, EventStore};

/// Generate the list-of-talks document for an event
pub fn generate_docx_list(store: &dyn EventStore, event_id: EventId) -> ExportResult<Vec<u8>> {
    let event = store.event(event_id)?;
    log_export("talk list", event_id, event);

    let mut doc = talk_list::render(event);
    styling::apply_uniform_style(&mut doc);
    Ok(doc.save_to_bytes()?)
}

/// Generate the session-report document for an event
pub fn generate_docx_report(store: &dyn EventStore, event_id: EventId) -> ExportResult<Vec<u8>> {
    let event = store.event(event_id)?;
    log_export("session report", event_id, event);

    let mut doc = session_report::render(event);
    styling::apply_uniform_style(&mut doc);
    Ok(doc.save_to_bytes()?)
}

/// Generate the accepted-publications document for an event
pub fn generate_docx_papers(store: &dyn EventStore, event_id: EventId) -> ExportResult<Vec<u8>> {
    let event = store.event(event_id)?;
    log_export("publications", event_id, event);

    let mut doc = publications::render(event);
    styling::apply_uniform_style(&mut doc);
    Ok(doc.save_to_bytes()?)
}

fn log_export(kind: &str, event_id: EventId, event: &Event) {
    tracing::info!(
        %event_id,
        contributions = event.contributions.len(),
        "generating {} document",
        kind
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_model::MemoryEventStore;

    #[test]
    fn unknown_event_id_is_an_error() {
        let store = MemoryEventStore::new();
        let result = generate_docx_list(&store, EventId(404));
        assert!(matches!(result, Err(ExportError::Event(_))));
    }

    #[test]
    fn known_event_produces_bytes() {
        let mut store = MemoryEventStore::new();
        store.insert(EventId(1), Event::new("Семинар"));

        let bytes = generate_docx_report(&store, EventId(1)).unwrap();
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
