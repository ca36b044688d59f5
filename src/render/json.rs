//! JSON rendering for models and extraction results.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a model or extraction result to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Paragraph};
    use crate::render::ExtractionResult;

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.title = Some("Test".to_string());
        doc.add_paragraph(Paragraph::with_text("Hello"));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let result = ExtractionResult::new("<p>x</p>".into(), "x".into());
        let json = to_json(&result, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"htmlContent":"<p>x</p>","plainTextContent":"x"}"#);
    }
}
