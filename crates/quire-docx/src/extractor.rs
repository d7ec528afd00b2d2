//! One-call extraction from an uploaded DOCX buffer

use tracing::debug;

use crate::archive::DocxArchive;
use crate::document::Document;
use crate::error::Result;
use crate::html::HtmlRenderer;
use crate::relationships::Relationships;

/// Converts DOCX buffers into baseline HTML or raw text
///
/// Stateless; one instance can serve any number of concurrent conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create an extractor
    pub fn new() -> Self {
        Self
    }

    /// Unpack and parse the main document part
    pub fn parse(&self, buffer: &[u8]) -> Result<(Document, Relationships)> {
        let archive = DocxArchive::from_bytes(buffer)?;
        let document = Document::parse(archive.document_xml())?;
        let relationships = match archive.document_rels_xml() {
            Some(xml) => Relationships::parse(xml)?,
            None => Relationships::new(),
        };
        debug!(
            "Parsed DOCX: {} paragraphs, {} relationships",
            document.paragraphs.len(),
            relationships.len()
        );
        Ok((document, relationships))
    }

    /// Convert a DOCX buffer to baseline HTML
    pub fn to_html(&self, buffer: &[u8]) -> Result<String> {
        let (document, relationships) = self.parse(buffer)?;
        Ok(HtmlRenderer::new()
            .with_relationships(&relationships)
            .render(&document))
    }

    /// Extract the raw text of a DOCX buffer, paragraphs separated by blank lines
    pub fn to_raw_text(&self, buffer: &[u8]) -> Result<String> {
        let (document, _) = self.parse(buffer)?;
        Ok(document.plain_text())
    }
}
