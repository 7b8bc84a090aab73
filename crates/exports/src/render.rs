//! Shared rendering shell used by all three report types

use doc_builder::{Alignment, Document, PageMargins, Paragraph, Run};
use event_model::Contribution;

/// Section heading for contributions without a schedule slot
pub const NO_TIME_HEADING: &str = "Доклады без указанного времени";

/// Placeholder title for untitled contributions
pub const UNTITLED: &str = "Без названия";

/// Page margins shared by all report documents
pub fn report_margins() -> PageMargins {
    PageMargins::from_inches(0.79, 0.79, 0.79, 0.39)
}

/// Start a report document: margins, centered report title, centered bold
/// event subtitle in quotes, then a spacer paragraph.
pub fn start_report(title: &str, event_title: &str) -> Document {
    let mut doc = Document::new();
    doc.page_margins = report_margins();

    doc.add_heading(title, 0).align(Alignment::Center);

    let mut subtitle = Paragraph::new();
    subtitle.add_run(Run::bold(format!("\"{}\"", event_title)));
    subtitle.align(Alignment::Center);
    doc.add_paragraph(subtitle);

    doc.add_empty_paragraph();
    doc
}

/// Session heading label. The numeral is the total count of date groups and
/// is only shown when there is more than one group; a single group keeps
/// the trailing space with no digit.
pub fn session_heading(total_days: usize) -> String {
    if total_days > 1 {
        format!("Заседание {}", total_days)
    } else {
        "Заседание ".to_string()
    }
}

/// Contribution title with the untitled fallback
pub fn contribution_title(contribution: &Contribution) -> &str {
    contribution.title.as_deref().unwrap_or(UNTITLED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_builder::BodyElement;

    #[test]
    fn session_heading_shows_total_only_for_multiple_days() {
        assert_eq!(session_heading(1), "Заседание ");
        assert_eq!(session_heading(3), "Заседание 3");
    }

    #[test]
    fn report_shell_structure() {
        let doc = start_report("СПИСОК ДОКЛАДОВ", "Весенний семинар");
        assert_eq!(doc.body.len(), 3);

        match &doc.body[0] {
            BodyElement::Paragraph(p) => {
                assert_eq!(p.style_id.as_deref(), Some("Title"));
                assert_eq!(p.plain_text(), "СПИСОК ДОКЛАДОВ");
            }
            _ => panic!("expected title paragraph"),
        }
        match &doc.body[1] {
            BodyElement::Paragraph(p) => {
                assert_eq!(p.plain_text(), "\"Весенний семинар\"");
                assert_eq!(p.runs[0].formatting.bold, Some(true));
            }
            _ => panic!("expected subtitle paragraph"),
        }
    }

    #[test]
    fn untitled_fallback() {
        let c = event_model::Contribution::untitled();
        assert_eq!(contribution_title(&c), UNTITLED);
    }
}
