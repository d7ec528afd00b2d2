//! Error types for DOCX extraction

use thiserror::Error;

/// Errors that can occur while unpacking or parsing a DOCX buffer
#[derive(Error, Debug)]
pub enum DocxError {
    /// The buffer is not a readable ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading an archive entry
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing XML content
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required part not found in archive
    #[error("Required part not found: {0}")]
    MissingPart(String),

    /// Invalid document structure
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;
