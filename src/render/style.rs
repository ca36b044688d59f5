//! Inline HTML rendering of styled text runs.

use crate::model::TextStyle;

/// Markup substituted for every newline in run text.
pub const LINE_BREAK: &str = "<br>";

/// A single inline style wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTransform {
    /// `<strong>`
    Bold,
    /// `<em>`
    Italic,
    /// `<u>`
    Underline,
    /// `<a href=... target="_blank">`
    Hyperlink,
}

/// Wrappers in application order, innermost first.
pub const STYLE_PIPELINE: [StyleTransform; 4] = [
    StyleTransform::Bold,
    StyleTransform::Italic,
    StyleTransform::Underline,
    StyleTransform::Hyperlink,
];

impl StyleTransform {
    /// Wrap `inner` if `style` enables this transform, otherwise return it as-is.
    pub fn apply(self, inner: String, style: &TextStyle) -> String {
        match self {
            StyleTransform::Bold if style.bold => format!("<strong>{}</strong>", inner),
            StyleTransform::Italic if style.italic => format!("<em>{}</em>", inner),
            StyleTransform::Underline if style.underline => format!("<u>{}</u>", inner),
            StyleTransform::Hyperlink => match style.link_url() {
                Some(url) => format!("<a href=\"{}\" target=\"_blank\">{}</a>", url, inner),
                None => inner,
            },
            _ => inner,
        }
    }
}

/// Render a run of text as inline HTML.
///
/// Newlines become [`LINE_BREAK`] before any wrapping. The text and URL are
/// not escaped; callers sanitize the HTML before display.
pub fn render_run(text: &str, style: Option<&TextStyle>) -> String {
    let html = text.replace('\n', LINE_BREAK);
    match style.filter(|style| style.has_styling()) {
        Some(style) => STYLE_PIPELINE
            .iter()
            .fold(html, |html, transform| transform.apply(html, style)),
        None => html,
    }
}
