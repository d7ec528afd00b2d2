//! quire-core - document conversion for the quire magazine site
//!
//! Turns uploaded word-processor documents into the strings stored with an
//! article, and derives article filenames from titles.
//!
//! # Example
//!
//! ```
//! use quire_core::{link_footnotes, normalize, slugify};
//!
//! assert_eq!(slugify("The Quick Brown Fox"), "quick-brown.html");
//! assert_eq!(normalize("\u{201C}Hi\u{201D} &amp; bye\u{2026}"), "\"Hi\" & bye...");
//!
//! let body = link_footnotes("<p>Claim<sup>1</sup></p>");
//! assert!(body.contains("id='fl1'"));
//! ```

pub mod citations;
pub mod convert;
pub mod draft;
pub mod entities;
pub mod footnotes;
pub mod highlight;
pub mod normalize;
pub mod settings;
pub mod slug;
pub mod upload;

// Re-export main types and functions
pub use citations::{build_citations, build_citations_with};
pub use convert::{
    convert_article_body, convert_citations, convert_preview, ConversionError, Converter,
    Extractor,
};
pub use draft::{ArticleDraft, ArticleSources};
pub use entities::unescape;
pub use footnotes::{link_footnotes, link_footnotes_with};
pub use highlight::HighlightSettings;
pub use normalize::{collapse_whitespace, normalize};
pub use settings::{Settings, SettingsError};
pub use slug::slugify;
pub use upload::{UploadError, UploadSettings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
