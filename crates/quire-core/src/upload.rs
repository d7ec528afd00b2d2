//! Upload validation for article documents and images
//!
//! Checks MIME type and size before a buffer reaches the converter. The
//! converter itself never relies on these checks and fails cleanly on any
//! buffer that is not a document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types accepted for article documents
pub const DOCUMENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
];

/// MIME types accepted for images
pub const IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];

/// Default size limit for uploads (10 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Why an upload was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. File must be a .docx document")]
    NotADocument,

    #[error("Invalid file type. Allowed types: {}", IMAGE_TYPES.join(", "))]
    NotAnImage,

    #[error("File too large. Maximum size: {}MB", .max_bytes / 1024 / 1024)]
    TooLarge { max_bytes: u64 },

    #[error("File is empty")]
    Empty,
}

/// Size limits for uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Largest accepted document, in bytes
    pub max_document_bytes: u64,
    /// Largest accepted image, in bytes
    pub max_image_bytes: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_BYTES,
            max_image_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl UploadSettings {
    /// Validate an uploaded article document
    ///
    /// Type is checked first, then size, then emptiness.
    pub fn validate_document(&self, mime: &str, size: u64) -> Result<(), UploadError> {
        if !DOCUMENT_TYPES.contains(&mime) {
            return Err(UploadError::NotADocument);
        }
        if size > self.max_document_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_document_bytes,
            });
        }
        if size == 0 {
            return Err(UploadError::Empty);
        }
        Ok(())
    }

    /// Validate an uploaded image
    ///
    /// Zero-length images are accepted.
    pub fn validate_image(&self, mime: &str, size: u64) -> Result<(), UploadError> {
        if !IMAGE_TYPES.contains(&mime) {
            return Err(UploadError::NotAnImage);
        }
        if size > self.max_image_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_image_bytes,
            });
        }
        Ok(())
    }
}

/// Guess a MIME type from a file extension
pub fn mime_from_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "docx" => Some(DOCUMENT_TYPES[0]),
        "doc" => Some(DOCUMENT_TYPES[1]),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
