//! List-of-talks renderer: per-date 4-column tables

use crate::render::{contribution_title, session_heading, start_report, NO_TIME_HEADING};
use crate::schedule::build_timetable;
use crate::{ru_date, status};
use doc_builder::{
    Alignment, CellVerticalAlign, Document, Paragraph, Run, Table, TableCell, TableRow,
};
use event_model::{Contribution, Event};

/// Document title for the list of talks
pub const LIST_TITLE: &str = "СПИСОК ДОКЛАДОВ";

const COLUMN_HEADERS: [&str; 4] = [
    "№",
    "Фамилия и инициалы докладчика, название доклада",
    "Статус (магистр / студент)",
    "Решение",
];

/// Render the list-of-talks document for an event
pub fn render(event: &Event) -> Document {
    let mut doc = start_report(LIST_TITLE, &event.title);
    let timetable = build_timetable(event);
    let total_days = timetable.day_count();

    for day in &timetable.days {
        doc.add_heading(session_heading(total_days), 1)
            .align(Alignment::Left);
        doc.add_paragraph(Paragraph::text(ru_date::format_date(day.date)))
            .align(Alignment::Left);

        doc.add_table(speaker_table(&day.contributions));
        doc.add_empty_paragraph();
    }

    if !timetable.unscheduled.is_empty() {
        doc.add_heading(NO_TIME_HEADING, 1).align(Alignment::Left);
        doc.add_table(speaker_table(&timetable.unscheduled));
    }

    doc
}

/// Build the 4-column speaker table for one section. Row numbering starts
/// at 1 and increments across every speaker of every contribution;
/// contributions without speakers are skipped entirely.
fn speaker_table(contributions: &[&Contribution]) -> Table {
    let mut table = Table::grid(4);
    table.add_row(header_row());

    let mut row_number = 1;
    for contribution in contributions {
        let speakers: Vec<_> = contribution.speakers().collect();
        if speakers.is_empty() {
            continue;
        }

        for speaker in speakers {
            let entry = format!(
                "{}. {}",
                speaker.short_name(),
                contribution_title(contribution)
            );

            table.add_row(TableRow::new(vec![
                TableCell::text(row_number.to_string())
                    .align(Alignment::Center)
                    .valign(CellVerticalAlign::Center),
                TableCell::text(entry)
                    .align(Alignment::Left)
                    .valign(CellVerticalAlign::Center),
                TableCell::text(status::speaker_status(speaker))
                    .align(Alignment::Center)
                    .valign(CellVerticalAlign::Center),
                // Decision column stays empty for manual filling
                TableCell::new()
                    .align(Alignment::Center)
                    .valign(CellVerticalAlign::Center),
            ]));

            row_number += 1;
        }
    }

    table
}

fn header_row() -> TableRow {
    let cells = COLUMN_HEADERS
        .iter()
        .map(|header| {
            let mut para = Paragraph::new();
            para.add_run(Run::bold(*header));
            para.align(Alignment::Center);
            TableCell {
                paragraphs: vec![para],
                vertical_align: Some(CellVerticalAlign::Center),
            }
        })
        .collect();

    TableRow::new(cells).header()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use doc_builder::BodyElement;
    use event_model::{Person, PersonLink};

    fn speaker(first: &str, last: &str) -> PersonLink {
        PersonLink::speaker(Person::new(first, last))
    }

    fn tables(doc: &Document) -> Vec<&Table> {
        doc.body
            .iter()
            .filter_map(|el| match el {
                BodyElement::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn two_talks_same_day_number_in_time_order() {
        let event = Event::new("Семинар")
            .with_contribution(
                Contribution::new("Поздний доклад")
                    .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap())
                    .with_link(speaker("Борис", "Второв")),
            )
            .with_contribution(
                Contribution::new("Ранний доклад")
                    .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                    .with_link(speaker("Анна", "Первова")),
            );

        let doc = render(&event);
        let tables = tables(&doc);
        assert_eq!(tables.len(), 1);

        // header + 2 speaker rows
        let table = tables[0];
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].cells[0].paragraphs[0].plain_text(), "1");
        assert!(table.rows[1].cells[1].paragraphs[0]
            .plain_text()
            .contains("Первова"));
        assert_eq!(table.rows[2].cells[0].paragraphs[0].plain_text(), "2");
        assert!(table.rows[2].cells[1].paragraphs[0]
            .plain_text()
            .contains("Второв"));
    }

    #[test]
    fn contribution_without_speakers_adds_no_rows() {
        let event = Event::new("Семинар").with_contribution(
            Contribution::new("Без докладчика")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()),
        );

        let doc = render(&event);
        let tables = tables(&doc);
        assert_eq!(tables[0].rows.len(), 1); // header only
    }

    #[test]
    fn two_speakers_share_a_contribution() {
        let event = Event::new("Семинар").with_contribution(
            Contribution::new("Совместный доклад")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                .with_link(speaker("Анна", "Первова"))
                .with_link(speaker("Борис", "Второв")),
        );

        let doc = render(&event);
        let table = tables(&doc)[0];
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].cells[0].paragraphs[0].plain_text(), "1");
        assert_eq!(table.rows[2].cells[0].paragraphs[0].plain_text(), "2");
    }

    #[test]
    fn unscheduled_section_gets_its_own_table() {
        let event = Event::new("Семинар")
            .with_contribution(
                Contribution::new("По расписанию")
                    .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                    .with_link(speaker("Анна", "Первова")),
            )
            .with_contribution(
                Contribution::new("Вне расписания").with_link(speaker("Борис", "Второв")),
            );

        let doc = render(&event);
        assert_eq!(tables(&doc).len(), 2);

        let has_no_time_heading = doc.body.iter().any(|el| match el {
            BodyElement::Paragraph(p) => p.plain_text() == NO_TIME_HEADING,
            _ => false,
        });
        assert!(has_no_time_heading);
    }

    #[test]
    fn status_column_reflects_affiliation() {
        let person = Person::new("Анна", "Первова").with_affiliation("студент 2 курса");
        let event = Event::new("Семинар").with_contribution(
            Contribution::new("Доклад")
                .with_start(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap())
                .with_link(PersonLink::speaker(person)),
        );

        let doc = render(&event);
        let table = tables(&doc)[0];
        assert_eq!(
            table.rows[1].cells[2].paragraphs[0].plain_text(),
            "Студент"
        );
    }
}
