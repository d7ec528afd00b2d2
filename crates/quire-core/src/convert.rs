//! Conversion entry points for uploaded documents
//!
//! Three operations take the bytes of one uploaded DOCX and return a
//! finished string for storage:
//!
//! - [`Converter::article_body`]: HTML with linked footnote markers
//! - [`Converter::citations`]: HTML citation blocks
//! - [`Converter::preview`]: plain text on a single line
//!
//! Each call is independent and all-or-nothing: an extractor failure is
//! returned as a [`ConversionError`] and no partial output is produced.

use quire_docx::{DocxError, DocxExtractor};
use thiserror::Error;
use tracing::{debug, warn};

use crate::citations::build_citations_with;
use crate::footnotes::link_footnotes_with;
use crate::highlight::HighlightSettings;
use crate::normalize::{collapse_whitespace, normalize};

/// Source of baseline HTML and raw text for a document buffer
pub trait Extractor {
    /// Convert a buffer to baseline HTML
    fn to_html(&self, buffer: &[u8]) -> quire_docx::Result<String>;

    /// Extract the raw text of a buffer
    fn to_raw_text(&self, buffer: &[u8]) -> quire_docx::Result<String>;
}

impl Extractor for DocxExtractor {
    fn to_html(&self, buffer: &[u8]) -> quire_docx::Result<String> {
        DocxExtractor::to_html(self, buffer)
    }

    fn to_raw_text(&self, buffer: &[u8]) -> quire_docx::Result<String> {
        DocxExtractor::to_raw_text(self, buffer)
    }
}

/// A document could not be converted
///
/// The message always carries the extractor's own error text.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to convert article .docx: {0}")]
    Article(#[source] DocxError),

    #[error("Failed to convert citations .docx: {0}")]
    Citations(#[source] DocxError),

    #[error("Failed to convert preview .docx: {0}")]
    Preview(#[source] DocxError),
}

impl ConversionError {
    /// The underlying extractor error
    pub fn extractor_error(&self) -> &DocxError {
        match self {
            ConversionError::Article(e)
            | ConversionError::Citations(e)
            | ConversionError::Preview(e) => e,
        }
    }
}

/// Result type for conversions
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Runs the conversion pipelines over a document extractor
///
/// Holds no per-call state; share one instance freely.
#[derive(Debug, Clone, Default)]
pub struct Converter<E = DocxExtractor> {
    extractor: E,
    highlight: HighlightSettings,
}

impl Converter<DocxExtractor> {
    /// Converter over the DOCX extractor with default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Extractor> Converter<E> {
    /// Converter over a custom extractor
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            highlight: HighlightSettings::default(),
        }
    }

    /// Use custom highlight parameters for footnote links
    pub fn with_highlight(mut self, highlight: HighlightSettings) -> Self {
        self.highlight = highlight;
        self
    }

    /// Highlight parameters in use
    pub fn highlight(&self) -> &HighlightSettings {
        &self.highlight
    }

    /// Article body: extract, normalize, link footnote markers
    pub fn article_body(&self, buffer: &[u8]) -> Result<String> {
        let html = self
            .extractor
            .to_html(buffer)
            .map_err(ConversionError::Article)?;
        warn_if_empty("article", &html);
        let html = normalize(&html);
        Ok(link_footnotes_with(&html, &self.highlight))
    }

    /// Citations: extract, normalize, wrap each paragraph as a citation block
    pub fn citations(&self, buffer: &[u8]) -> Result<String> {
        let html = self
            .extractor
            .to_html(buffer)
            .map_err(ConversionError::Citations)?;
        warn_if_empty("citations", &html);
        let html = normalize(&html);
        Ok(build_citations_with(&html, &self.highlight))
    }

    /// Preview: extract raw text, normalize, collapse whitespace
    pub fn preview(&self, buffer: &[u8]) -> Result<String> {
        let text = self
            .extractor
            .to_raw_text(buffer)
            .map_err(ConversionError::Preview)?;
        let text = collapse_whitespace(&normalize(&text));
        debug!("Preview text is {} characters", text.chars().count());
        Ok(text)
    }
}

fn warn_if_empty(kind: &str, html: &str) {
    if html.trim().is_empty() {
        warn!("Uploaded {} document has no paragraphs", kind);
    }
}

/// Convert an article body with default settings
pub fn convert_article_body(buffer: &[u8]) -> Result<String> {
    Converter::new().article_body(buffer)
}

/// Convert a citations document with default settings
pub fn convert_citations(buffer: &[u8]) -> Result<String> {
    Converter::new().citations(buffer)
}

/// Convert a preview document with default settings
pub fn convert_preview(buffer: &[u8]) -> Result<String> {
    Converter::new().preview(buffer)
}
