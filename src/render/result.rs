//! Extraction result with statistics.

use crate::model::{Document, SheetPayload};
use serde::{Deserialize, Serialize};

use super::html::{push_paragraph, sheet_to_html, TABLE_CLOSE, TABLE_OPEN};
use super::text::sheet_to_text;

/// Result of extracting a payload: display HTML and plain text.
///
/// Serializes to `{"htmlContent": ..., "plainTextContent": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// HTML rendering; not sanitized
    pub html_content: String,

    /// Plain text rendering
    pub plain_text_content: String,
}

impl ExtractionResult {
    /// Create a new extraction result.
    pub fn new(html_content: String, plain_text_content: String) -> Self {
        Self {
            html_content,
            plain_text_content,
        }
    }

    /// A result with both fields empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether both outputs are empty.
    ///
    /// A bare table shell counts as empty HTML.
    pub fn is_empty(&self) -> bool {
        self.plain_text_content.is_empty() && is_blank_html(&self.html_content)
    }

    /// Limit the plain text to `max_chars` characters.
    ///
    /// The HTML is left untouched.
    pub fn with_text_budget(mut self, max_chars: usize) -> Self {
        if let Some((cut, _)) = self.plain_text_content.char_indices().nth(max_chars) {
            self.plain_text_content.truncate(cut);
        }
        self
    }
}

fn is_blank_html(html: &str) -> bool {
    html.is_empty()
        || html
            .strip_prefix(TABLE_OPEN)
            .and_then(|rest| rest.strip_suffix(TABLE_CLOSE))
            .is_some_and(str::is_empty)
}

/// Render a document to HTML and plain text in a single pass.
pub fn render_document(doc: &Document) -> ExtractionResult {
    let mut html = String::new();
    let mut text = String::new();
    for para in doc.paragraphs() {
        push_paragraph(&mut html, para);
        for run in &para.runs {
            text.push_str(&run.text);
        }
    }
    ExtractionResult::new(html, text)
}

/// Render a spreadsheet payload to an HTML table and tab-separated text.
pub fn render_sheet(sheet: &SheetPayload) -> ExtractionResult {
    ExtractionResult::new(sheet_to_html(sheet), sheet_to_text(sheet))
}

/// Statistics collected about an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of paragraphs
    pub paragraph_count: usize,

    /// Number of paragraphs without text runs
    pub empty_paragraph_count: usize,

    /// Number of text runs
    pub run_count: usize,

    /// Number of blocks skipped as unsupported
    pub unsupported_block_count: usize,

    /// Number of sheets or value ranges
    pub sheet_count: usize,

    /// Number of table rows
    pub row_count: usize,

    /// Number of table cells
    pub cell_count: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// Character count (excluding whitespace)
    pub char_count: usize,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn for_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            match block.as_paragraph() {
                Some(para) => {
                    stats.paragraph_count += 1;
                    if para.is_empty() {
                        stats.empty_paragraph_count += 1;
                    }
                    stats.run_count += para.runs.len();
                }
                None => stats.unsupported_block_count += 1,
            }
        }
        stats.count_text(&doc.plain_text());
        stats
    }

    /// Collect statistics for a spreadsheet payload.
    pub fn for_sheet(sheet: &SheetPayload) -> Self {
        let mut stats = Self {
            sheet_count: sheet.sheet_count(),
            row_count: sheet.row_count(),
            cell_count: sheet.cell_count(),
            ..Self::default()
        };
        stats.count_text(&sheet_to_text(sheet));
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count();
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count();
    }
}
