//! Uniform document styling pass
//!
//! Applied once, after a renderer has produced the full body: every run gets
//! Times New Roman 14pt in black, every paragraph (including table cell
//! paragraphs) gets 1.5 line spacing. Bold/italic set by the renderers is
//! left untouched.

use doc_builder::{CharacterProperties, Document, LineSpacing, Paragraph};

/// Font applied to every run
pub const REPORT_FONT: &str = "Times New Roman";

/// Font size in points applied to every run
pub const REPORT_FONT_SIZE: f32 = 14.0;

/// Text color applied to every run
pub const REPORT_COLOR: &str = "000000";

/// Line spacing applied to every paragraph
pub const REPORT_LINE_SPACING: f32 = 1.5;

fn uniform_format() -> CharacterProperties {
    CharacterProperties {
        font_family: Some(REPORT_FONT.to_string()),
        font_size: Some(REPORT_FONT_SIZE),
        color: Some(REPORT_COLOR.to_string()),
        ..Default::default()
    }
}

fn style_paragraph(para: &mut Paragraph, format: &CharacterProperties) {
    para.formatting.line_spacing = Some(LineSpacing::Multiple(REPORT_LINE_SPACING));
    for run in &mut para.runs {
        run.apply_formatting(format);
    }
}

/// Apply the uniform report styling to the whole document in one pass
pub fn apply_uniform_style(doc: &mut Document) {
    let format = uniform_format();

    for para in doc.paragraphs_mut() {
        style_paragraph(para, &format);
    }

    for table in doc.tables_mut() {
        for row in &mut table.rows {
            for cell in &mut row.cells {
                for para in &mut cell.paragraphs {
                    style_paragraph(para, &format);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_builder::{Run, Table, TableCell, TableRow};

    #[test]
    fn styles_body_and_cell_runs() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::text("текст"));

        let mut table = Table::grid(1);
        table.add_row(TableRow::new(vec![TableCell::text("ячейка")]));
        doc.add_table(table);

        apply_uniform_style(&mut doc);

        for para in doc.paragraphs_mut() {
            assert_eq!(
                para.formatting.line_spacing,
                Some(LineSpacing::Multiple(1.5))
            );
            for run in &para.runs {
                assert_eq!(run.formatting.font_family.as_deref(), Some(REPORT_FONT));
                assert_eq!(run.formatting.font_size, Some(REPORT_FONT_SIZE));
                assert_eq!(run.formatting.color.as_deref(), Some(REPORT_COLOR));
            }
        }

        for table in doc.tables_mut() {
            let para = &table.rows[0].cells[0].paragraphs[0];
            assert_eq!(
                para.runs[0].formatting.font_family.as_deref(),
                Some(REPORT_FONT)
            );
            assert_eq!(
                para.formatting.line_spacing,
                Some(LineSpacing::Multiple(1.5))
            );
        }
    }

    #[test]
    fn keeps_bold_and_italic() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_run(Run::bold("жирный"));
        para.add_run(Run::italic("курсив"));
        doc.add_paragraph(para);

        apply_uniform_style(&mut doc);

        let para = doc.paragraphs_mut().next().unwrap();
        assert_eq!(para.runs[0].formatting.bold, Some(true));
        assert_eq!(para.runs[1].formatting.italic, Some(true));
    }
}
