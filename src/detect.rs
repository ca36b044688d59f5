//! Content type detection from payload shape.

use serde_json::Value;

use crate::extract::ContentType;

/// Top-level fields that only a document payload carries.
const DOCUMENT_FIELDS: &[&str] = &["body", "documentId"];

/// Top-level fields that only a spreadsheet payload carries.
const SHEET_FIELDS: &[&str] = &["sheets", "valueRanges", "spreadsheetId"];

/// Detect the content type of a payload from its top-level fields.
///
/// # Returns
/// * `Some(ContentType::Document)` for a `documents.get` payload
/// * `Some(ContentType::Sheet)` for a grid or range-form spreadsheet payload
/// * `None` when the shape is not recognized
///
/// # Example
/// ```
/// use unsuite::detect::detect_content_type;
/// use unsuite::extract::ContentType;
/// use serde_json::json;
///
/// let payload = json!({"valueRanges": []});
/// assert_eq!(detect_content_type(&payload), Some(ContentType::Sheet));
/// ```
pub fn detect_content_type(payload: &Value) -> Option<ContentType> {
    let object = payload.as_object()?;

    if DOCUMENT_FIELDS.iter().any(|field| object.contains_key(*field)) {
        return Some(ContentType::Document);
    }
    if SHEET_FIELDS.iter().any(|field| object.contains_key(*field)) {
        return Some(ContentType::Sheet);
    }
    // A single-range `values.get` response.
    if object.contains_key("range") && object.get("values").is_some_and(Value::is_array) {
        return Some(ContentType::Sheet);
    }
    None
}

/// Check if a payload looks like a document.
pub fn is_document(payload: &Value) -> bool {
    detect_content_type(payload) == Some(ContentType::Document)
}

/// Check if a payload looks like a spreadsheet.
pub fn is_sheet(payload: &Value) -> bool {
    detect_content_type(payload) == Some(ContentType::Sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_document() {
        let payload = json!({"documentId": "1abc", "body": {"content": []}});
        assert_eq!(detect_content_type(&payload), Some(ContentType::Document));
        assert!(is_document(&payload));
        assert!(!is_sheet(&payload));
    }

    #[test]
    fn test_detect_grid_sheet() {
        let payload = json!({"spreadsheetId": "1xyz", "sheets": []});
        assert_eq!(detect_content_type(&payload), Some(ContentType::Sheet));
    }

    #[test]
    fn test_detect_single_range() {
        let payload = json!({"range": "Sheet1!A1:B2", "values": [["a"]]});
        assert!(is_sheet(&payload));
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_content_type(&json!({})), None);
        assert_eq!(detect_content_type(&json!({"values": "x"})), None);
        assert_eq!(detect_content_type(&json!([1, 2, 3])), None);
        assert_eq!(detect_content_type(&Value::Null), None);
    }
}
