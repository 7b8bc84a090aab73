//! End-to-end tests: generate documents and inspect the DOCX package

use chrono::{TimeZone, Utc};
use event_model::{
    Contribution, Event, EventId, MemoryEventStore, PaperRevision, PaperRevisionState, Person,
    PersonLink,
};
use exports::{generate_docx_list, generate_docx_papers, generate_docx_report};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};

fn sample_store() -> MemoryEventStore {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let early = Contribution::new("Ранний доклад")
        .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
        .with_link(PersonLink::speaker(
            Person::new("Анна", "Первова").with_affiliation("студент 2 курса"),
        ))
        .with_paper(PaperRevision::new(PaperRevisionState::Accepted));

    let late = Contribution::new("Поздний доклад")
        .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap())
        .with_link(PersonLink::speaker(
            Person::new("Борис", "Второв").with_affiliation("магистрант"),
        ));

    let unscheduled =
        Contribution::new("Вне расписания").with_link(PersonLink::speaker(Person::new(
            "Вера", "Третьякова",
        )));

    let mut store = MemoryEventStore::new();
    store.insert(
        EventId(1),
        Event::new("Весенний семинар")
            .with_contribution(late)
            .with_contribution(early)
            .with_contribution(unscheduled),
    );
    store
}

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// All text node content of the document, in document order
fn text_content(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    let mut buf = Vec::new();
    let mut texts = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(XmlEvent::Text(t)) => {
                texts.push(String::from_utf8(t.to_vec()).unwrap());
            }
            Ok(XmlEvent::Eof) => break,
            Err(e) => panic!("XML error: {}", e),
            _ => {}
        }
        buf.clear();
    }

    texts
}

#[test]
fn package_contains_required_parts() {
    let store = sample_store();
    let bytes = generate_docx_list(&store, EventId(1)).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/_rels/document.xml.rels",
        "word/document.xml",
        "word/styles.xml",
        "word/settings.xml",
    ] {
        assert!(archive.by_name(part).is_ok(), "missing part {}", part);
    }
}

#[test]
fn talk_list_rows_numbered_in_time_order() {
    let store = sample_store();
    let bytes = generate_docx_list(&store, EventId(1)).unwrap();
    let xml = document_xml(&bytes);

    let texts = text_content(&xml);
    let early_pos = texts
        .iter()
        .position(|t| t.contains("Ранний доклад"))
        .unwrap();
    let late_pos = texts
        .iter()
        .position(|t| t.contains("Поздний доклад"))
        .unwrap();
    assert!(early_pos < late_pos, "talks must appear in time order");

    // Row numbers precede the entries they number
    assert_eq!(texts[early_pos - 1], "1");
    assert_eq!(texts[late_pos - 1], "2");
}

#[test]
fn talk_list_contains_title_statuses_and_no_time_section() {
    let store = sample_store();
    let bytes = generate_docx_list(&store, EventId(1)).unwrap();
    let xml = document_xml(&bytes);

    assert!(xml.contains("СПИСОК ДОКЛАДОВ"));
    assert!(xml.contains("&quot;Весенний семинар&quot;"));
    assert!(xml.contains("10 марта 2024 г."));
    assert!(xml.contains("Студент"));
    assert!(xml.contains("Магистр"));
    assert!(xml.contains("Доклады без указанного времени"));
    assert!(xml.contains("Третьякова"));
}

#[test]
fn uniform_styling_applied_to_every_run() {
    let store = sample_store();
    let bytes = generate_docx_report(&store, EventId(1)).unwrap();
    let xml = document_xml(&bytes);

    // Every run carries the report font, size, and color
    let runs = xml.matches("<w:r>").count();
    assert!(runs > 0);
    assert_eq!(xml.matches(r#"w:ascii="Times New Roman""#).count(), runs);
    assert_eq!(xml.matches(r#"<w:sz w:val="28"/>"#).count(), runs);
    assert_eq!(xml.matches(r#"<w:color w:val="000000"/>"#).count(), runs);
}

#[test]
fn report_heading_and_margins() {
    let store = sample_store();
    let bytes = generate_docx_report(&store, EventId(1)).unwrap();
    let xml = document_xml(&bytes);

    assert!(xml.contains("ОТЧЕТ О ПРОВЕДЕНИИ КОНФЕРЕНЦИИ"));
    assert!(xml.contains("10 марта 2024 г., 09-00"));
    assert!(xml.contains(r#"w:left="1137""#));
    assert!(xml.contains(r#"w:right="561""#));
}

#[test]
fn papers_document_lists_only_accepted() {
    let store = sample_store();
    let bytes = generate_docx_papers(&store, EventId(1)).unwrap();
    let xml = document_xml(&bytes);

    assert!(xml.contains("СПИСОК ПУБЛИКАЦИЙ"));
    assert!(xml.contains("Ранний доклад"));
    assert!(!xml.contains("Поздний доклад"));
    assert!(!xml.contains("Статьи, принятые к публикации, не найдены."));
}

#[test]
fn papers_placeholder_for_event_without_accepted_papers() {
    let mut store = MemoryEventStore::new();
    store.insert(
        EventId(2),
        Event::new("Пустой семинар").with_contribution(
            Contribution::new("Без статьи")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                .with_link(PersonLink::speaker(Person::new("Анна", "Первова"))),
        ),
    );

    let bytes = generate_docx_papers(&store, EventId(2)).unwrap();
    let xml = document_xml(&bytes);
    assert!(xml.contains("Статьи, принятые к публикации, не найдены."));
    assert!(xml.contains("<w:i/>"));
}

#[test]
fn deleted_contributions_never_rendered() {
    let mut deleted = Contribution::new("Удалённый доклад")
        .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
        .with_link(PersonLink::speaker(Person::new("Иван", "Скрытов")));
    deleted.is_deleted = true;

    let mut store = MemoryEventStore::new();
    store.insert(
        EventId(3),
        Event::new("Семинар").with_contribution(deleted),
    );

    for bytes in [
        generate_docx_list(&store, EventId(3)).unwrap(),
        generate_docx_report(&store, EventId(3)).unwrap(),
        generate_docx_papers(&store, EventId(3)).unwrap(),
    ] {
        let xml = document_xml(&bytes);
        assert!(!xml.contains("Удалённый доклад"));
    }
}
