//! # quire-docx
//!
//! DOCX (Office Open XML) reading for quire.
//!
//! This crate provides functionality to:
//! - Unpack DOCX buffers received from uploads
//! - Parse body paragraphs, runs, hyperlinks and note references
//! - Render baseline HTML or raw text for downstream processing
//!
//! ## Example
//!
//! ```
//! use quire_docx::DocxExtractor;
//! # use std::io::Write;
//! # let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
//! # zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default()).unwrap();
//! # zip.write_all(br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//! #   <w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#).unwrap();
//! # let bytes = zip.finish().unwrap().into_inner();
//!
//! let html = DocxExtractor::new().to_html(&bytes)?;
//! assert_eq!(html, "<p>Hello</p>");
//! # Ok::<(), quire_docx::DocxError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod extractor;
pub mod html;
pub mod relationships;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use archive::DocxArchive;
pub use document::{Document, Hyperlink, NoteKind, Paragraph, ParagraphChild, Run, VertAlign};
pub use error::{DocxError, Result};
pub use extractor::DocxExtractor;
pub use html::{escape_attribute, escape_text, render_html, HtmlRenderer};
pub use relationships::Relationships;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
