//! Plain text rendering for documents and spreadsheets.

use crate::model::{Document, SheetPayload, Spreadsheet, ValueRanges};

/// Convert a document to plain text.
///
/// Run texts are concatenated in reading order. Paragraph boundaries add no
/// separator beyond the newlines the runs carry themselves.
pub fn document_to_text(doc: &Document) -> String {
    doc.plain_text()
}

/// Convert a spreadsheet payload to tab-separated text.
pub fn sheet_to_text(sheet: &SheetPayload) -> String {
    match sheet {
        SheetPayload::Grid(grid) => grid_to_text(grid),
        SheetPayload::Ranges(ranges) => ranges_to_text(ranges),
    }
}

/// Convert a grid-form spreadsheet to text: one line per row, cells joined by tabs.
pub fn grid_to_text(grid: &Spreadsheet) -> String {
    let mut output = String::new();
    for row in grid.rows() {
        output.push_str(&row.plain_text());
        output.push('\n');
    }
    output
}

/// Convert a range-form spreadsheet to text.
///
/// Ranges without values contribute nothing, not even a blank line.
pub fn ranges_to_text(ranges: &ValueRanges) -> String {
    ranges.ranges.iter().map(|range| range.plain_text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridRow, Paragraph, Sheet, TextRun, ValueRange};
    use serde_json::json;

    #[test]
    fn test_document_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello, world!\n"));
        let mut para = Paragraph::new();
        para.add_run(TextRun::bold("Second"));
        para.add_run(TextRun::new(" paragraph."));
        doc.add_paragraph(para);

        assert_eq!(
            document_to_text(&doc),
            "Hello, world!\nSecond paragraph."
        );
    }

    #[test]
    fn test_grid_to_text() {
        let mut grid = Spreadsheet::new();
        grid.add_sheet(Sheet::with_rows(vec![
            GridRow::from_strings(["a", "b"]),
            GridRow::from_strings(["c"]),
        ]));
        grid.add_sheet(Sheet::with_rows(vec![GridRow::default()]));

        assert_eq!(grid_to_text(&grid), "a\tb\nc\n\n");
    }

    #[test]
    fn test_ranges_to_text() {
        let mut ranges = ValueRanges::new();
        ranges.add_range(ValueRange::with_values(vec![vec![json!("x"), json!("y")]]));
        ranges.add_range(ValueRange::default());
        ranges.add_range(ValueRange::with_values(vec![vec![json!(1.25)], vec![]]));

        assert_eq!(ranges_to_text(&ranges), "x\ty\n1.25\n\n");
    }

    #[test]
    fn test_empty_sheet_text() {
        let sheet = SheetPayload::Grid(Spreadsheet::new());
        assert_eq!(sheet_to_text(&sheet), "");
    }
}
