//! Rendering module for converting content models to HTML and plain text.

mod html;
mod json;
mod result;
pub mod style;
mod text;

pub use html::{
    document_to_html, empty_table, grid_to_html, ranges_to_html, sheet_to_html, TABLE_CLOSE,
    TABLE_OPEN,
};
pub use json::{to_json, JsonFormat};
pub use result::{render_document, render_sheet, ExtractionResult, ExtractionStats};
pub use style::{render_run, StyleTransform, LINE_BREAK, STYLE_PIPELINE};
pub use text::{document_to_text, grid_to_text, ranges_to_text, sheet_to_text};
