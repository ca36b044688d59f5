//! Document extractor.

use serde_json::Value;

use super::{ContentExtractor, ContentType};
use crate::error::Result;
use crate::model::Document;
use crate::render::{document_to_html, document_to_text, render_document, ExtractionResult};

/// Extracts HTML and plain text from `documents.get` payloads.
///
/// A payload without `body.content` extracts to an empty result.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor {
    _private: (),
}

impl DocumentExtractor {
    /// Create a new document extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Build the document model; a missing payload is an empty document.
    pub fn document(&self, payload: &Value) -> Result<Document> {
        match Document::from_json(payload) {
            Err(err) if err.is_missing_payload() => {
                log::debug!("document payload is empty: {}", err);
                Ok(Document::new())
            }
            other => other,
        }
    }

    /// Extract only the HTML rendering.
    pub fn extract_html(&self, payload: &Value) -> Result<String> {
        Ok(document_to_html(&self.document(payload)?))
    }

    /// Extract only the plain text rendering.
    pub fn extract_plain_text(&self, payload: &Value) -> Result<String> {
        Ok(document_to_text(&self.document(payload)?))
    }
}

impl ContentExtractor for DocumentExtractor {
    fn content_type(&self) -> ContentType {
        ContentType::Document
    }

    fn name(&self) -> &str {
        "document"
    }

    fn extract(&self, payload: &Value) -> Result<ExtractionResult> {
        let doc = self.document(payload)?;
        Ok(render_document(&doc))
    }
}
