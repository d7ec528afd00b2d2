//! Baseline HTML rendering
//!
//! Turns a parsed [`Document`] into flat HTML: `<p>`, `<h1>`..`<h6>` and
//! `<ul><li>` blocks containing `<strong>`, `<em>`, `<s>`, `<sup>`, `<sub>`,
//! `<a>` and `<br />`. Empty paragraphs are dropped. Adjacent runs with the
//! same formatting are merged, so a superscript split across several runs
//! still yields a single `<sup>` element.
//!
//! Markup-significant characters in document text are written as numeric
//! character references (`&#38;`, `&#60;`, `&#62;`, `&#34;`). Attribute
//! values additionally encode every non-ASCII character, so no later
//! character mapping can produce a quote inside an attribute.

use crate::document::{Document, Hyperlink, NoteKind, Paragraph, ParagraphChild, Run, VertAlign};
use crate::relationships::Relationships;

/// URL schemes allowed in rendered hyperlinks
const SAFE_SCHEMES: &[&str] = &["http:", "https:", "mailto:"];

/// Renders documents to baseline HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer<'a> {
    relationships: Option<&'a Relationships>,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a renderer without hyperlink resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve external hyperlinks through the document relationships
    pub fn with_relationships(mut self, relationships: &'a Relationships) -> Self {
        self.relationships = Some(relationships);
        self
    }

    /// Render the whole document
    pub fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        let mut notes = NoteCounter::default();
        let mut in_list = false;

        for para in document.paragraphs.iter().filter(|p| !p.is_empty()) {
            let tag = block_tag(para);

            if tag == "li" && !in_list {
                out.push_str("<ul>");
                in_list = true;
            } else if tag != "li" && in_list {
                out.push_str("</ul>");
                in_list = false;
            }

            out.push('<');
            out.push_str(tag);
            out.push('>');
            self.render_children(para, &mut notes, &mut out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        if in_list {
            out.push_str("</ul>");
        }
        out
    }

    fn render_children(&self, para: &Paragraph, notes: &mut NoteCounter, out: &mut String) {
        let mut pending = PendingText::default();

        for child in &para.children {
            match child {
                ParagraphChild::Run(run) => pending.push_run(run, notes, out),
                ParagraphChild::Hyperlink(link) => {
                    pending.flush(out);
                    self.render_hyperlink(link, notes, out);
                }
            }
        }
        pending.flush(out);
    }

    fn render_hyperlink(&self, link: &Hyperlink, notes: &mut NoteCounter, out: &mut String) {
        let href = self.hyperlink_href(link);

        if let Some(href) = &href {
            out.push_str("<a href=\"");
            out.push_str(&escape_attribute(href));
            out.push_str("\">");
        }

        let mut pending = PendingText::default();
        for run in &link.runs {
            pending.push_run(run, notes, out);
        }
        pending.flush(out);

        if href.is_some() {
            out.push_str("</a>");
        }
    }

    fn hyperlink_href(&self, link: &Hyperlink) -> Option<String> {
        let external = link
            .id
            .as_deref()
            .and_then(|id| self.relationships?.hyperlink_target(id))
            .filter(|url| is_safe_url(url));

        match (external, &link.anchor) {
            (Some(url), Some(anchor)) => Some(format!("{}#{}", url, anchor)),
            (Some(url), None) => Some(url.to_string()),
            (None, Some(anchor)) => Some(format!("#{}", anchor)),
            (None, None) => None,
        }
    }
}

/// Render a document without hyperlink resolution
pub fn render_html(document: &Document) -> String {
    HtmlRenderer::new().render(document)
}

/// Escape document text for HTML element content
///
/// Newlines become `<br />`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&#38;"),
            '<' => out.push_str("&#60;"),
            '>' => out.push_str("&#62;"),
            '"' => out.push_str("&#34;"),
            '\n' => out.push_str("<br />"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted attribute
///
/// Quotes, markup characters, controls and all non-ASCII characters are
/// written as decimal references.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' | '<' | '>' | '"' | '\'' => out.push_str(&format!("&#{};", c as u32)),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => out.push_str(&format!("&#{};", c as u32)),
        }
    }
    out
}

fn block_tag(para: &Paragraph) -> &'static str {
    if para.is_list_item() {
        return "li";
    }
    match para.style_id.as_deref().map(heading_level) {
        Some(Some(1)) => "h1",
        Some(Some(2)) => "h2",
        Some(Some(3)) => "h3",
        Some(Some(4)) => "h4",
        Some(Some(5)) => "h5",
        Some(Some(6)) => "h6",
        _ => "p",
    }
}

/// Heading level for a paragraph style ID (`Heading1`..`Heading6`, `Title`)
fn heading_level(style_id: &str) -> Option<u8> {
    let lower = style_id.to_ascii_lowercase();
    if lower == "title" {
        return Some(1);
    }
    lower
        .strip_prefix("heading")
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=6).contains(n))
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    SAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Running counters for native note references
#[derive(Default)]
struct NoteCounter {
    footnotes: usize,
    endnotes: usize,
}

impl NoteCounter {
    fn next(&mut self, kind: NoteKind) -> usize {
        let counter = match kind {
            NoteKind::Footnote => &mut self.footnotes,
            NoteKind::Endnote => &mut self.endnotes,
        };
        *counter += 1;
        *counter
    }
}

/// Formatting that determines the wrapping elements of a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Formatting {
    bold: bool,
    italic: bool,
    strike: bool,
    vert_align: VertAlign,
}

impl Formatting {
    fn of(run: &Run) -> Self {
        Self {
            bold: run.bold,
            italic: run.italic,
            strike: run.strike,
            vert_align: run.vert_align,
        }
    }

    /// Tags from outermost to innermost
    fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        match self.vert_align {
            VertAlign::Superscript => tags.push("sup"),
            VertAlign::Subscript => tags.push("sub"),
            VertAlign::Baseline => {}
        }
        if self.strike {
            tags.push("s");
        }
        if self.italic {
            tags.push("em");
        }
        if self.bold {
            tags.push("strong");
        }
        tags
    }
}

/// Text accumulated from consecutive runs sharing one formatting
#[derive(Default)]
struct PendingText {
    span: Option<(Formatting, String)>,
}

impl PendingText {
    fn push_run(&mut self, run: &Run, notes: &mut NoteCounter, out: &mut String) {
        if !run.text.is_empty() {
            let formatting = Formatting::of(run);
            match &mut self.span {
                Some((current, text)) if *current == formatting => text.push_str(&run.text),
                _ => {
                    self.flush(out);
                    self.span = Some((formatting, run.text.clone()));
                }
            }
        }

        if let Some(kind) = run.note {
            self.flush(out);
            out.push_str(&format!("<sup>{}</sup>", notes.next(kind)));
        }
    }

    fn flush(&mut self, out: &mut String) {
        if let Some((formatting, text)) = self.span.take() {
            let tags = formatting.tags();
            for tag in &tags {
                out.push('<');
                out.push_str(tag);
                out.push('>');
            }
            out.push_str(&escape_text(&text));
            for tag in tags.iter().rev() {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
