//! Content extraction dispatch for document and spreadsheet payloads.
//!
//! Extractors are registered by [`ContentType`]; the registry picks the one
//! matching the requested type and turns any failure into an empty result.
//!
//! # Example
//!
//! ```
//! use unsuite::extract::{ContentType, ExtractorRegistry};
//! use serde_json::json;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let payload = json!({"valueRanges": [{"values": [["x", "y"]]}]});
//!
//! let result = registry.dispatch(ContentType::Sheet, &payload);
//! assert_eq!(result.plain_text_content, "x\ty\n");
//! ```

mod document;
mod sheet;

pub use document::DocumentExtractor;
pub use sheet::SheetExtractor;

use crate::error::{Error, Result};
use crate::render::ExtractionResult;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Kind of content a payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// A text document
    Document,

    /// A spreadsheet, in grid or range form
    Sheet,
}

impl ContentType {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Document => "document",
            ContentType::Sheet => "sheet",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "document" | "doc" | "docs" => Ok(ContentType::Document),
            "sheet" | "sheets" | "spreadsheet" => Ok(ContentType::Sheet),
            _ => Err(Error::UnknownContentType(s.to_string())),
        }
    }
}

/// Trait for content extractors.
///
/// Implement this trait to add support for a new payload kind.
pub trait ContentExtractor: Send + Sync {
    /// Get the content type this extractor handles.
    fn content_type(&self) -> ContentType;

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract HTML and plain text from a parsed payload.
    fn extract(&self, payload: &Value) -> Result<ExtractionResult>;

    /// Extract from a JSON string.
    fn extract_str(&self, json: &str) -> Result<ExtractionResult> {
        let payload: Value = serde_json::from_str(json)?;
        self.extract(&payload)
    }
}

/// Registry for content extractors.
///
/// The registry maps content types to extractors and never lets an
/// extraction failure reach the caller through [`dispatch`](Self::dispatch).
pub struct ExtractorRegistry {
    extractors: HashMap<ContentType, Arc<dyn ContentExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the document and sheet extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocumentExtractor::new()));
        registry.register(Arc::new(SheetExtractor::new()));
        registry
    }

    /// Register an extractor, replacing any previous one for its content type.
    pub fn register(&mut self, extractor: Arc<dyn ContentExtractor>) {
        self.extractors.insert(extractor.content_type(), extractor);
    }

    /// Get the extractor for a content type.
    pub fn get(&self, content_type: ContentType) -> Option<Arc<dyn ContentExtractor>> {
        self.extractors.get(&content_type).cloned()
    }

    /// Check if a content type is supported.
    pub fn supports(&self, content_type: ContentType) -> bool {
        self.extractors.contains_key(&content_type)
    }

    /// Extract a payload, propagating errors.
    pub fn extract(&self, content_type: ContentType, payload: &Value) -> Result<ExtractionResult> {
        let extractor = self
            .get(content_type)
            .ok_or_else(|| Error::NoExtractor(content_type.to_string()))?;
        extractor.extract(payload)
    }

    /// Extract a JSON string, propagating errors.
    pub fn extract_str(&self, content_type: ContentType, json: &str) -> Result<ExtractionResult> {
        let extractor = self
            .get(content_type)
            .ok_or_else(|| Error::NoExtractor(content_type.to_string()))?;
        extractor.extract_str(json)
    }

    /// Extract a payload; any failure yields an empty result.
    pub fn dispatch(&self, content_type: ContentType, payload: &Value) -> ExtractionResult {
        self.extract(content_type, payload)
            .unwrap_or_else(|err| absorb(content_type, err))
    }

    /// Extract a JSON string; any failure, invalid JSON included, yields an
    /// empty result.
    pub fn dispatch_str(&self, content_type: ContentType, json: &str) -> ExtractionResult {
        self.extract_str(content_type, json)
            .unwrap_or_else(|err| absorb(content_type, err))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn absorb(content_type: ContentType, err: Error) -> ExtractionResult {
    log::warn!("{} extraction failed: {}", content_type, err);
    ExtractionResult::empty()
}
