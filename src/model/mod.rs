//! Content model types for document and spreadsheet payloads.
//!
//! This module defines the intermediate representation that bridges the raw
//! JSON returned by the document API and content rendering. Models are built
//! leniently: elements with an unexpected shape are skipped and logged, and
//! traversal continues with the next element.

mod document;
mod sheet;
mod value;

pub use document::{Block, Document, Link, Paragraph, TextRun, TextStyle};
pub use sheet::{
    GridCell, GridData, GridRow, Sheet, SheetPayload, Spreadsheet, ValueRange, ValueRanges,
};
pub use value::cell_text;
