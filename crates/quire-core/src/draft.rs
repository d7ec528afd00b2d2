//! Article draft assembly
//!
//! Converts the documents uploaded for one article into the fields that
//! are stored with it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::convert::{Converter, Extractor, Result};
use crate::slug::slugify;

/// Uploaded inputs for one article
#[derive(Debug, Clone, Copy)]
pub struct ArticleSources<'a> {
    /// Human title, used to derive the filename
    pub title: &'a str,
    /// Article body document
    pub content: &'a [u8],
    /// Citations document; absent or empty means no citations
    pub citations: Option<&'a [u8]>,
    /// Preview document
    pub preview: &'a [u8],
}

/// Converted fields of an article, named as they are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub file_name: String,
    pub content: String,
    pub citations: String,
    pub preview_text: String,
}

impl<E: Extractor> Converter<E> {
    /// Convert every document of an article
    ///
    /// Fails on the first document that cannot be converted.
    pub fn draft(&self, sources: &ArticleSources<'_>) -> Result<ArticleDraft> {
        let content = self.article_body(sources.content)?;
        let citations = match sources.citations {
            Some(buffer) if !buffer.is_empty() => self.citations(buffer)?,
            _ => String::new(),
        };
        let preview_text = self.preview(sources.preview)?;
        let file_name = slugify(sources.title);

        info!("Prepared article draft {}", file_name);
        Ok(ArticleDraft {
            title: sources.title.to_string(),
            file_name,
            content,
            citations,
            preview_text,
        })
    }
}
