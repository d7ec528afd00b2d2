//! quire CLI - Command-line interface library
//!
//! This library provides the CLI functionality for quire, including:
//! - Article / Citations / Preview: convert one uploaded document
//! - Slug: derive an article filename from a title
//! - Draft: convert every document of an article at once
//!
//! # Library Usage
//!
//! ```ignore
//! use quire_cli::{build_draft, load_settings, render_draft, OutputFormat};
//!
//! let settings = load_settings(None)?;
//! let draft = build_draft("On Beauty", &content, &preview, None, &settings)?;
//! println!("{}", render_draft(&draft, OutputFormat::Json)?);
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Article body HTML with linked footnote markers
//! quire article essay.docx --output essay.html
//!
//! # Citation blocks
//! quire citations notes.docx
//!
//! # Everything stored with an article, as JSON
//! quire draft --title "On Beauty" --content essay.docx --preview teaser.docx \
//!     --citations notes.docx --format json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    build_draft, convert_command, draft_command, load_settings, read_document, render_draft,
    slug_command,
};
pub use app::{run_cli, DocumentKind, OutputFormat};
