//! HTML rendering for documents and spreadsheets.

use crate::model::{cell_text, Document, Paragraph, SheetPayload, Spreadsheet, ValueRanges};

use super::style::render_run;

/// Opening tag of every rendered table.
pub const TABLE_OPEN: &str = "<table border='1'>";

/// Closing tag of every rendered table.
pub const TABLE_CLOSE: &str = "</table>";

/// Convert a document to HTML.
///
/// Each paragraph becomes one `<p>` element; paragraphs are concatenated
/// without separators and non-paragraph blocks produce nothing.
pub fn document_to_html(doc: &Document) -> String {
    let mut output = String::new();
    for para in doc.paragraphs() {
        push_paragraph(&mut output, para);
    }
    output
}

pub(crate) fn push_paragraph(output: &mut String, para: &Paragraph) {
    output.push_str("<p>");
    for run in &para.runs {
        output.push_str(&render_run(&run.text, run.style.as_ref()));
    }
    output.push_str("</p>");
}

/// Convert a spreadsheet payload to an HTML table.
pub fn sheet_to_html(sheet: &SheetPayload) -> String {
    match sheet {
        SheetPayload::Grid(grid) => grid_to_html(grid),
        SheetPayload::Ranges(ranges) => ranges_to_html(ranges),
    }
}

/// Convert a grid-form spreadsheet to an HTML table.
///
/// Every row of every sheet and data block becomes one `<tr>` with exactly
/// one `<td>` per input cell.
pub fn grid_to_html(grid: &Spreadsheet) -> String {
    let mut output = String::from(TABLE_OPEN);
    for row in grid.rows() {
        push_row(&mut output, row.cells.iter().map(|cell| cell.as_str()));
    }
    output.push_str(TABLE_CLOSE);
    output
}

/// Convert a range-form spreadsheet to an HTML table.
pub fn ranges_to_html(ranges: &ValueRanges) -> String {
    let mut output = String::from(TABLE_OPEN);
    for row in ranges.rows() {
        push_row(&mut output, row.iter().map(cell_text));
    }
    output.push_str(TABLE_CLOSE);
    output
}

/// The table rendered for a spreadsheet with no rows.
pub fn empty_table() -> String {
    format!("{}{}", TABLE_OPEN, TABLE_CLOSE)
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: impl Iterator<Item = S>) {
    output.push_str("<tr>");
    for cell in cells {
        output.push_str("<td>");
        output.push_str(cell.as_ref());
        output.push_str("</td>");
    }
    output.push_str("</tr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridRow, Sheet, TextRun, ValueRange};
    use serde_json::json;

    #[test]
    fn test_document_to_html() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_run(TextRun::new("Hello "));
        para.add_run(TextRun::bold("world\n"));
        doc.add_paragraph(para);
        doc.add_paragraph(Paragraph::with_text("Next\n"));

        assert_eq!(
            document_to_html(&doc),
            "<p>Hello <strong>world<br></strong></p><p>Next<br></p>"
        );
    }

    #[test]
    fn test_empty_paragraph() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new());
        assert_eq!(document_to_html(&doc), "<p></p>");
        assert_eq!(document_to_html(&Document::new()), "");
    }

    #[test]
    fn test_grid_to_html() {
        let mut grid = Spreadsheet::new();
        grid.add_sheet(Sheet::with_rows(vec![
            GridRow::from_strings(["a", "b"]),
            GridRow::from_strings(["c"]),
        ]));

        assert_eq!(
            grid_to_html(&grid),
            "<table border='1'><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>"
        );
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(grid_to_html(&Spreadsheet::new()), empty_table());
        assert_eq!(empty_table(), "<table border='1'></table>");
    }

    #[test]
    fn test_ranges_to_html() {
        let mut ranges = ValueRanges::new();
        ranges.add_range(ValueRange::with_values(vec![vec![json!("x"), json!(7), json!(null)]]));

        assert_eq!(
            ranges_to_html(&ranges),
            "<table border='1'><tr><td>x</td><td>7</td><td></td></tr></table>"
        );
    }
}
