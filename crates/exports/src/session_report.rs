//! Session-report renderer: numbered bold-prefixed paragraphs per date

use crate::render::{contribution_title, session_heading, start_report, NO_TIME_HEADING};
use crate::ru_date;
use crate::schedule::build_timetable;
use doc_builder::{Alignment, Document, Paragraph, Run};
use event_model::{Contribution, Event};

/// Document title for the session report
pub const REPORT_TITLE: &str = "ОТЧЕТ О ПРОВЕДЕНИИ КОНФЕРЕНЦИИ";

/// Render the session-report document for an event
pub fn render(event: &Event) -> Document {
    let mut doc = start_report(REPORT_TITLE, &event.title);
    let timetable = build_timetable(event);
    let total_days = timetable.day_count();

    for day in &timetable.days {
        doc.add_heading(session_heading(total_days), 1)
            .align(Alignment::Left);

        let date_label = match day.earliest_start() {
            Some(start) => ru_date::format_date_with_time(start),
            None => ru_date::format_date(day.date),
        };
        doc.add_paragraph(Paragraph::text(date_label))
            .align(Alignment::Left);

        add_entries(&mut doc, &day.contributions);
        doc.add_empty_paragraph();
    }

    if !timetable.unscheduled.is_empty() {
        doc.add_heading(NO_TIME_HEADING, 1).align(Alignment::Left);
        add_entries(&mut doc, &timetable.unscheduled);
    }

    doc
}

/// Append one numbered paragraph per (contribution, speaker) pair. The
/// number and speaker name are bold, the title is plain; numbering starts
/// at 1 within the section.
fn add_entries(doc: &mut Document, contributions: &[&Contribution]) {
    let mut entry_number = 1;
    for contribution in contributions {
        let speakers: Vec<_> = contribution.speakers().collect();
        if speakers.is_empty() {
            continue;
        }

        for speaker in speakers {
            let mut para = Paragraph::new();
            para.add_run(Run::bold(format!("{}. ", entry_number)));
            para.add_run(Run::bold(speaker.short_name()));
            para.add_text(format!(". {}", contribution_title(contribution)));
            doc.add_paragraph(para);

            entry_number += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use doc_builder::BodyElement;
    use event_model::{Person, PersonLink};

    fn paragraphs(doc: &Document) -> Vec<&Paragraph> {
        doc.body
            .iter()
            .filter_map(|el| match el {
                BodyElement::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn entries_are_numbered_and_bold_prefixed() {
        let event = Event::new("Семинар").with_contribution(
            Contribution::new("Доклад")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                .with_link(PersonLink::speaker(Person::new("Анна", "Первова"))),
        );

        let doc = render(&event);
        let entry = paragraphs(&doc)
            .into_iter()
            .find(|p| p.plain_text().contains("Первова"))
            .expect("entry paragraph");

        assert!(entry.plain_text().starts_with("1. "));
        assert_eq!(entry.runs[0].formatting.bold, Some(true));
        assert_eq!(entry.runs[1].formatting.bold, Some(true));
        assert_eq!(entry.runs[2].formatting.bold, None);
        assert!(entry.plain_text().ends_with(". Доклад"));
    }

    #[test]
    fn date_heading_carries_earliest_time() {
        let event = Event::new("Семинар")
            .with_contribution(
                Contribution::new("Поздний")
                    .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap())
                    .with_link(PersonLink::speaker(Person::new("Борис", "Второв"))),
            )
            .with_contribution(
                Contribution::new("Ранний")
                    .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                    .with_link(PersonLink::speaker(Person::new("Анна", "Первова"))),
            );

        let doc = render(&event);
        assert!(paragraphs(&doc)
            .iter()
            .any(|p| p.plain_text() == "10 марта 2024 г., 09-00"));
    }

    #[test]
    fn speakerless_contribution_produces_no_entry() {
        let event = Event::new("Семинар").with_contribution(
            Contribution::new("Пустой")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()),
        );

        let doc = render(&event);
        assert!(!paragraphs(&doc)
            .iter()
            .any(|p| p.plain_text().contains("Пустой")));
    }
}
