//! # unsuite
//!
//! Content extraction from document and spreadsheet API payloads.
//!
//! This library walks the JSON returned by a document API (documents,
//! spreadsheets in grid form, spreadsheets in value-range form) and renders
//! it to lightly-styled HTML for display and plain text for downstream
//! language processing.
//!
//! ## Quick Start
//!
//! ```
//! use unsuite::{extract, ContentType};
//! use serde_json::json;
//!
//! let payload = json!({"body": {"content": [{"paragraph": {"elements": [
//!     {"textRun": {"content": "Hi\n", "textStyle": {"bold": true}}}
//! ]}}]}});
//!
//! let result = extract(ContentType::Document, &payload);
//! assert_eq!(result.html_content, "<p><strong>Hi<br></strong></p>");
//! assert_eq!(result.plain_text_content, "Hi\n");
//! ```
//!
//! ## Features
//!
//! - **Two outputs per payload**: HTML (`<p>`, `<strong>`, `<em>`, `<u>`,
//!   `<a>`, tables) and plain text
//! - **Both sheet shapes**: grid data (`sheets`) and value ranges (`valueRanges`)
//! - **Lenient traversal**: malformed elements are skipped, never fatal
//! - **No sanitization**: HTML must be sanitized by the caller before display

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_content_type, is_document, is_sheet};
pub use error::{Error, Result};
pub use extract::{
    ContentExtractor, ContentType, DocumentExtractor, ExtractorRegistry, SheetExtractor,
};
pub use model::{
    Block, Document, GridCell, GridData, GridRow, Link, Paragraph, Sheet, SheetPayload,
    Spreadsheet, TextRun, TextStyle, ValueRange, ValueRanges,
};
pub use render::{ExtractionResult, ExtractionStats, JsonFormat};

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Extract HTML and plain text from a payload of the given content type.
///
/// Never fails: a malformed payload yields an empty result.
///
/// # Example
///
/// ```
/// use unsuite::{extract, ContentType};
/// use serde_json::json;
///
/// let result = extract(ContentType::Sheet, &json!({}));
/// assert_eq!(result.html_content, "<table border='1'></table>");
/// assert_eq!(result.plain_text_content, "");
/// ```
pub fn extract(content_type: ContentType, payload: &Value) -> ExtractionResult {
    ExtractorRegistry::with_defaults().dispatch(content_type, payload)
}

/// Extract from a JSON string. Invalid JSON yields an empty result.
pub fn extract_str(content_type: ContentType, json: &str) -> ExtractionResult {
    ExtractorRegistry::with_defaults().dispatch_str(content_type, json)
}

/// Extract a payload whose content type is detected from its shape.
///
/// An unrecognized shape yields an empty result.
pub fn extract_auto(payload: &Value) -> ExtractionResult {
    match detect_content_type(payload) {
        Some(content_type) => extract(content_type, payload),
        None => {
            log::warn!("unable to detect content type of payload");
            ExtractionResult::empty()
        }
    }
}

/// Read a JSON payload from a file.
///
/// # Example
///
/// ```no_run
/// use unsuite::{extract, read_payload, ContentType};
///
/// let payload = read_payload("document.json")?;
/// let result = extract(ContentType::Document, &payload);
/// println!("{}", result.plain_text_content);
/// # Ok::<(), unsuite::Error>(())
/// ```
pub fn read_payload<P: AsRef<Path>>(path: P) -> Result<Value> {
    let file = File::open(path)?;
    read_payload_from(BufReader::new(file))
}

/// Read a JSON payload from a reader.
pub fn read_payload_from<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a payload file and extract it.
///
/// I/O and JSON errors are returned; extraction itself never fails.
pub fn extract_file<P: AsRef<Path>>(content_type: ContentType, path: P) -> Result<ExtractionResult> {
    let payload = read_payload(path)?;
    Ok(extract(content_type, &payload))
}

/// Extract only the plain text of a document payload.
pub fn document_plain_text(payload: &Value) -> String {
    DocumentExtractor::new()
        .extract_plain_text(payload)
        .unwrap_or_default()
}

/// Extract only the HTML of a document payload.
pub fn document_html(payload: &Value) -> String {
    DocumentExtractor::new()
        .extract_html(payload)
        .unwrap_or_default()
}

/// Extract only the plain text of a spreadsheet payload.
pub fn sheet_plain_text(payload: &Value) -> String {
    SheetExtractor::new()
        .extract_plain_text(payload)
        .unwrap_or_default()
}

/// Extract only the HTML of a spreadsheet payload.
pub fn sheet_html(payload: &Value) -> String {
    SheetExtractor::new()
        .extract_html(payload)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_extract_auto() {
        let doc = json!({"body": {"content": [{"paragraph": {"elements": [
            {"textRun": {"content": "a"}}
        ]}}]}});
        assert_eq!(extract_auto(&doc).html_content, "<p>a</p>");

        let sheet = json!({"valueRanges": [{"values": [["x"]]}]});
        assert_eq!(extract_auto(&sheet).plain_text_content, "x\n");

        assert_eq!(extract_auto(&json!({"kind": "drive#file"})), ExtractionResult::empty());
    }

    #[test]
    fn test_extract_str_invalid_json() {
        assert_eq!(
            extract_str(ContentType::Document, "not json"),
            ExtractionResult::empty()
        );
    }

    #[test]
    fn test_extract_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sheets": [{{"data": [{{"rowData": [{{"values": [{{"formattedValue": "1"}}]}}]}}]}}]}}"#
        )
        .unwrap();

        let result = extract_file(ContentType::Sheet, file.path()).unwrap();
        assert_eq!(result.plain_text_content, "1\n");
        assert_eq!(
            result.html_content,
            "<table border='1'><tr><td>1</td></tr></table>"
        );
    }

    #[test]
    fn test_extract_file_missing() {
        let err = extract_file(ContentType::Sheet, "/nonexistent/payload.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_single_output_helpers() {
        assert_eq!(document_plain_text(&json!({})), "");
        assert_eq!(document_html(&json!(42)), "");
        assert_eq!(sheet_plain_text(&json!({})), "");
        assert_eq!(sheet_html(&json!({})), "<table border='1'></table>");
        assert_eq!(sheet_html(&json!("x")), "<table border='1'></table>");
    }
}
