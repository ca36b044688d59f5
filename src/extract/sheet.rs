//! Spreadsheet extractor.

use serde_json::Value;

use super::{ContentExtractor, ContentType};
use crate::error::Result;
use crate::model::{SheetPayload, Spreadsheet};
use crate::render::{render_sheet, sheet_to_html, sheet_to_text, ExtractionResult};

/// Extracts an HTML table and tab-separated text from spreadsheet payloads.
///
/// Handles both the grid form (`sheets`) and the range form (`valueRanges`).
/// A payload with neither extracts to an empty table shell and empty text.
#[derive(Debug, Clone, Default)]
pub struct SheetExtractor {
    _private: (),
}

impl SheetExtractor {
    /// Create a new sheet extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Build the sheet model; a missing payload is an empty grid.
    pub fn sheet(&self, payload: &Value) -> Result<SheetPayload> {
        match SheetPayload::from_json(payload) {
            Err(err) if err.is_missing_payload() => {
                log::debug!("sheet payload is empty: {}", err);
                Ok(SheetPayload::Grid(Spreadsheet::new()))
            }
            other => other,
        }
    }

    /// Extract only the HTML table.
    pub fn extract_html(&self, payload: &Value) -> Result<String> {
        Ok(sheet_to_html(&self.sheet(payload)?))
    }

    /// Extract only the plain text.
    pub fn extract_plain_text(&self, payload: &Value) -> Result<String> {
        Ok(sheet_to_text(&self.sheet(payload)?))
    }
}

impl ContentExtractor for SheetExtractor {
    fn content_type(&self) -> ContentType {
        ContentType::Sheet
    }

    fn name(&self) -> &str {
        "sheet"
    }

    fn extract(&self, payload: &Value) -> Result<ExtractionResult> {
        let sheet = self.sheet(payload)?;
        Ok(render_sheet(&sheet))
    }
}
