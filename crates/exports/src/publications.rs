//! Publications renderer: accepted papers as numbered author/title entries

use crate::render::{contribution_title, session_heading, start_report, NO_TIME_HEADING};
use crate::ru_date;
use crate::schedule::build_timetable;
use doc_builder::{Alignment, Document, Paragraph, Run};
use event_model::{Contribution, Event};

/// Document title for the publications list
pub const PAPERS_TITLE: &str = "СПИСОК ПУБЛИКАЦИЙ";

/// Placeholder shown when no accepted papers exist anywhere in the event
pub const NO_PAPERS_PLACEHOLDER: &str = "Статьи, принятые к публикации, не найдены.";

/// Render the accepted-publications document for an event.
///
/// Only contributions with a paper revision in the accepted state produce
/// entries. Numbering restarts at 1 in each section; a separate count of
/// emitted entries spans every section, and when it never advances the
/// document ends with an italic placeholder.
pub fn render(event: &Event) -> Document {
    let mut doc = start_report(PAPERS_TITLE, &event.title);
    let timetable = build_timetable(event);
    let total_days = timetable.day_count();

    let mut emitted = 0usize;

    for day in &timetable.days {
        doc.add_heading(format!("{}.", session_heading(total_days)), 1)
            .align(Alignment::Left);

        let date_label = match day.earliest_start() {
            Some(start) => ru_date::format_day_month_with_time(start),
            None => ru_date::format_date(day.date),
        };
        doc.add_paragraph(Paragraph::text(date_label))
            .align(Alignment::Left);

        emitted += add_entries(&mut doc, &day.contributions);
        doc.add_empty_paragraph();
    }

    if !timetable.unscheduled.is_empty() {
        doc.add_heading(NO_TIME_HEADING, 1).align(Alignment::Left);
        emitted += add_entries(&mut doc, &timetable.unscheduled);
    }

    if emitted == 0 {
        let mut para = Paragraph::new();
        para.add_run(Run::italic(NO_PAPERS_PLACEHOLDER));
        doc.add_paragraph(para);
    }

    doc
}

/// Append one entry per (accepted contribution, speaker) pair: indented
/// bold number, bold full author name, optional affiliation, then the
/// title on its own line. Numbering is local to the call; returns the
/// number of entries appended.
fn add_entries(doc: &mut Document, contributions: &[&Contribution]) -> usize {
    let mut entry_number = 0usize;

    for contribution in contributions {
        if !contribution.has_accepted_paper() {
            continue;
        }

        let authors: Vec<_> = contribution.speakers().collect();
        if authors.is_empty() {
            continue;
        }

        for author in authors {
            entry_number += 1;

            let mut para = Paragraph::new();
            para.add_run(Run::bold(format!("    {}. ", entry_number)));
            para.add_run(Run::bold(author.full_name()));
            if let Some(affiliation) = &author.affiliation {
                para.add_text(format!(", {}", affiliation));
            }
            para.add_text("\n");
            para.add_text(contribution_title(contribution));
            doc.add_paragraph(para);
        }
    }

    entry_number
}
