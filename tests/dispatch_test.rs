//! Integration tests for the extractor registry.

use serde_json::{json, Value};
use std::sync::Arc;
use unsuite::error::Result;
use unsuite::extract::{
    ContentExtractor, ContentType, DocumentExtractor, ExtractorRegistry, SheetExtractor,
};
use unsuite::{extract_auto, extract_str, read_payload_from, Error, ExtractionResult};

/// Mock extractor for testing.
struct MockExtractor {
    content_type: ContentType,
    fail: bool,
}

impl MockExtractor {
    fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            fail: false,
        }
    }

    fn failing(content_type: ContentType) -> Self {
        Self {
            content_type,
            fail: true,
        }
    }
}

impl ContentExtractor for MockExtractor {
    fn content_type(&self) -> ContentType {
        self.content_type
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn extract(&self, _payload: &Value) -> Result<ExtractionResult> {
        if self.fail {
            return Err(Error::Render("mock failure".into()));
        }
        Ok(ExtractionResult::new(
            "<p>mock</p>".to_string(),
            "mock".to_string(),
        ))
    }
}

#[test]
fn test_registry_new_is_empty() {
    let registry = ExtractorRegistry::new();
    assert!(!registry.supports(ContentType::Document));
    assert!(!registry.supports(ContentType::Sheet));
}

#[test]
fn test_registry_with_defaults() {
    let registry = ExtractorRegistry::with_defaults();
    assert_eq!(registry.get(ContentType::Document).unwrap().name(), "document");
    assert_eq!(registry.get(ContentType::Sheet).unwrap().name(), "sheet");
}

#[test]
fn test_register_replaces_extractor() {
    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(ContentType::Sheet)));

    assert_eq!(registry.get(ContentType::Sheet).unwrap().name(), "mock");
    let result = registry.dispatch(ContentType::Sheet, &json!({}));
    assert_eq!(result.plain_text_content, "mock");

    // The document extractor is untouched.
    assert_eq!(registry.get(ContentType::Document).unwrap().name(), "document");
}

#[test]
fn test_dispatch_absorbs_extractor_failure() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::failing(ContentType::Document)));

    assert!(registry.extract(ContentType::Document, &json!({})).is_err());
    assert_eq!(
        registry.dispatch(ContentType::Document, &json!({})),
        ExtractionResult::empty()
    );
}

#[test]
fn test_dispatch_selects_by_content_type() {
    let registry = ExtractorRegistry::with_defaults();
    let payload = json!({"valueRanges": [{"values": [["x"]]}]});

    // The same payload read as a document has no body.
    assert_eq!(
        registry.dispatch(ContentType::Document, &payload),
        ExtractionResult::empty()
    );
    assert_eq!(
        registry.dispatch(ContentType::Sheet, &payload).plain_text_content,
        "x\n"
    );
}

#[test]
fn test_malformed_payloads_degrade_to_empty_fields() {
    let registry = ExtractorRegistry::with_defaults();

    for payload in [json!("string"), json!(12), json!([1, 2])] {
        assert_eq!(
            registry.dispatch(ContentType::Document, &payload),
            ExtractionResult::empty()
        );
        // A sheet always keeps the table shell.
        let sheet = registry.dispatch(ContentType::Sheet, &payload);
        assert_eq!(sheet.html_content, "<table border='1'></table>");
        assert_eq!(sheet.plain_text_content, "");
    }
}

#[test]
fn test_extract_str() {
    let json = r#"{"body":{"content":[{"paragraph":{"elements":[{"textRun":{"content":"x"}}]}}]}}"#;
    let result = extract_str(ContentType::Document, json);
    assert_eq!(result.html_content, "<p>x</p>");

    assert_eq!(extract_str(ContentType::Sheet, ""), ExtractionResult::empty());
}

#[test]
fn test_extractors_implement_trait() {
    let extractors: Vec<Arc<dyn ContentExtractor>> = vec![
        Arc::new(DocumentExtractor::new()),
        Arc::new(SheetExtractor::new()),
    ];
    let types: Vec<ContentType> = extractors.iter().map(|e| e.content_type()).collect();
    assert_eq!(types, vec![ContentType::Document, ContentType::Sheet]);
}

#[test]
fn test_read_payload_and_auto_extract() {
    let bytes = br#"{"documentId":"d","body":{"content":[{"paragraph":{"elements":[{"textRun":{"content":"read\n"}}]}}]}}"#;
    let payload = read_payload_from(&bytes[..]).unwrap();
    assert_eq!(extract_auto(&payload).plain_text_content, "read\n");

    assert!(matches!(read_payload_from(&b"{"[..]), Err(Error::Json(_))));
}

#[test]
fn test_result_message_shape() {
    let result = extract_auto(&json!({"valueRanges": [{"values": [["a"]]}]}));
    let message = serde_json::to_value(&result).unwrap();
    assert_eq!(
        message,
        json!({
            "htmlContent": "<table border='1'><tr><td>a</td></tr></table>",
            "plainTextContent": "a\n"
        })
    );
}
