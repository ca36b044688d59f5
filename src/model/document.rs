//! Document, paragraph and text-level types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{flag, kind, string_field};
use crate::error::{Error, Result};

/// A text document: an ordered sequence of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title, when the payload carries one
    pub title: Option<String>,

    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a `documents.get` payload.
    ///
    /// Returns [`Error::MissingPayload`] when the payload is `null` or has no
    /// `body.content` array, and [`Error::MalformedPayload`] when it is not a
    /// JSON object. Blocks with an unexpected shape are skipped.
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Err(Error::MissingPayload("body.content"));
        }
        if !value.is_object() {
            return Err(Error::MalformedPayload(format!(
                "expected a document object, found {}",
                kind(value)
            )));
        }

        let content = value
            .get("body")
            .and_then(|body| body.get("content"))
            .and_then(Value::as_array)
            .ok_or(Error::MissingPayload("body.content"))?;

        let mut doc = Document {
            title: string_field(value, "title"),
            blocks: Vec::with_capacity(content.len()),
        };

        for (index, element) in content.iter().enumerate() {
            match Block::from_json(element, index) {
                Ok(block) => doc.blocks.push(block),
                Err(err) => log::debug!("skipping block: {}", err),
            }
        }

        Ok(doc)
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Iterate over paragraph blocks in reading order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    /// Get the plain text of the document.
    ///
    /// Run texts are concatenated as-is; paragraph boundaries add nothing.
    pub fn plain_text(&self) -> String {
        self.paragraphs().map(Paragraph::plain_text).collect()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs().next().is_none()
    }
}

/// A top-level document element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text runs
    Paragraph(Paragraph),

    /// Any other structural element (table, section break, table of contents)
    Unsupported {
        /// Field name of the element kind in the payload
        kind: String,
    },
}

impl Block {
    fn from_json(element: &Value, index: usize) -> Result<Self> {
        let path = format!("body.content[{}]", index);
        let object = element
            .as_object()
            .ok_or_else(|| Error::malformed_element(&path, format!("found {}", kind(element))))?;

        match object.get("paragraph") {
            Some(paragraph) => Paragraph::from_json(paragraph, &path).map(Block::Paragraph),
            None => {
                let kind = object
                    .keys()
                    .find(|key| !key.ends_with("Index"))
                    .cloned()
                    .unwrap_or_default();
                Ok(Block::Unsupported { kind })
            }
        }
    }

    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            Block::Unsupported { .. } => None,
        }
    }
}

/// A paragraph of text runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Add a text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    fn from_json(paragraph: &Value, path: &str) -> Result<Self> {
        let elements = paragraph
            .get("elements")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed_element(path, "paragraph has no elements array"))?;

        let mut p = Paragraph {
            runs: Vec::with_capacity(elements.len()),
        };
        for (index, element) in elements.iter().enumerate() {
            // Inline objects, page breaks and footnote references carry no text.
            let Some(text_run) = element.get("textRun") else {
                continue;
            };
            match TextRun::from_json(text_run) {
                Some(run) => p.runs.push(run),
                None => log::debug!(
                    "skipping text run at {}.paragraph.elements[{}]: no content",
                    path,
                    index
                ),
            }
        }
        Ok(p)
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content, possibly with embedded newlines
    pub text: String,

    /// Text styling, when the payload carries a style
    pub style: Option<TextStyle>,
}

impl TextRun {
    /// Create a new unstyled text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a text run with the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Create a hyperlinked text run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::styled(
            text,
            TextStyle {
                link: Some(Link::new(url)),
                ..Default::default()
            },
        )
    }

    /// Runs without content are dropped, matching the API's empty runs.
    fn from_json(text_run: &Value) -> Option<Self> {
        let text = text_run.get("content").and_then(Value::as_str)?;
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            style: text_run.get("textStyle").map(TextStyle::from_json),
        })
    }
}

/// Text styling flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Hyperlink target
    pub link: Option<Link>,
}

impl TextStyle {
    fn from_json(style: &Value) -> Self {
        Self {
            bold: flag(style, "bold"),
            italic: flag(style, "italic"),
            underline: flag(style, "underline"),
            link: style.get("link").filter(|link| link.is_object()).map(|link| Link {
                url: string_field(link, "url"),
            }),
        }
    }

    /// Get the link URL, if a non-empty one is set.
    pub fn link_url(&self) -> Option<&str> {
        self.link
            .as_ref()
            .and_then(|link| link.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.link_url().is_some()
    }
}

/// A hyperlink attached to a text run.
///
/// Links to headings or bookmarks carry no `url` and render as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub url: Option<String>,
}

impl Link {
    /// Create a link to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}
