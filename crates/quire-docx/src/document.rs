//! Document content parsing (word/document.xml)
//!
//! This module parses the main document body into paragraphs of formatted
//! runs. Table cells are flattened into the paragraph stream; drawings,
//! text boxes and embedded objects are skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{DocxError, Result};

/// A parsed Word document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph with its content and style
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Children (runs and hyperlinks)
    pub children: Vec<ParagraphChild>,
    /// Numbering info (for lists)
    pub numbering: Option<NumberingRef>,
}

/// Child elements of a paragraph
#[derive(Debug, Clone)]
pub enum ParagraphChild {
    /// A text run
    Run(Run),
    /// A hyperlink
    Hyperlink(Hyperlink),
}

/// A hyperlink with its target and content
#[derive(Debug, Clone, Default)]
pub struct Hyperlink {
    /// Relationship ID for external URLs (r:id)
    pub id: Option<String>,
    /// Internal anchor name (w:anchor)
    pub anchor: Option<String>,
    /// Child runs inside the hyperlink
    pub runs: Vec<Run>,
}

/// Vertical alignment of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertAlign {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

/// Kind of native note reference carried by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

/// A text run with formatting
///
/// Tabs are stored as `\t` and line breaks as `\n`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Whether the text is bold
    pub bold: bool,
    /// Whether the text is italic
    pub italic: bool,
    /// Whether the text is struck through
    pub strike: bool,
    /// Superscript / subscript
    pub vert_align: VertAlign,
    /// Native footnote or endnote reference following the text
    pub note: Option<NoteKind>,
}

/// Reference to numbering definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingRef {
    /// Numbering ID (0 means numbering explicitly removed)
    pub num_id: u32,
    /// Indent level (0-based)
    pub ilvl: u32,
}

impl Document {
    /// Parse a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut parser = DocumentParser::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => parser.start(e),
                Ok(Event::Empty(ref e)) => {
                    // Self-closing elements open and close in one event
                    parser.start(e);
                    parser.end(e.local_name().as_ref());
                }
                Ok(Event::End(ref e)) => parser.end(e.local_name().as_ref()),
                Ok(Event::Text(ref e)) => {
                    if parser.wants_text() {
                        let text = e.unescape()?;
                        parser.push_text(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        parser.finish()
    }

    /// Get plain text content, paragraphs separated by a blank line
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check whether the document has no visible content at all
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.is_empty())
    }
}

impl Paragraph {
    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph has no visible content
    pub fn is_empty(&self) -> bool {
        self.runs()
            .all(|run| run.note.is_none() && run.text.trim().is_empty())
    }

    /// Get all runs (flattening hyperlinks)
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.children.iter().flat_map(|child| match child {
            ParagraphChild::Run(run) => std::slice::from_ref(run).iter(),
            ParagraphChild::Hyperlink(hyperlink) => hyperlink.runs.iter(),
        })
    }

    /// Whether the paragraph takes part in a numbered or bulleted list
    pub fn is_list_item(&self) -> bool {
        self.numbering.is_some_and(|n| n.num_id != 0)
    }
}

/// Elements whose whole subtree is ignored
const SKIPPED: &[&[u8]] = &[
    b"drawing",
    b"pict",
    b"object",
    b"txbxContent",
    b"rPrChange",
    b"pPrChange",
];

/// Event-driven parse state for `word/document.xml`
#[derive(Default)]
struct DocumentParser {
    paragraphs: Vec<Paragraph>,
    saw_body: bool,
    in_body: bool,
    skip_depth: u32,
    in_text_element: bool,
    current_para: Option<Paragraph>,
    current_run: Option<Run>,
    current_hyperlink: Option<Hyperlink>,
}

impl DocumentParser {
    fn start(&mut self, e: &BytesStart) {
        let name = e.local_name();
        let name = name.as_ref();

        if SKIPPED.contains(&name) {
            self.skip_depth += 1;
            return;
        }
        if self.skip_depth > 0 {
            return;
        }

        match name {
            b"body" => {
                self.saw_body = true;
                self.in_body = true;
            }
            b"p" if self.in_body => {
                self.flush_paragraph();
                self.current_para = Some(Paragraph::default());
            }
            b"pStyle" => {
                if let (Some(para), Some(style)) = (self.current_para.as_mut(), attr(e, b"val")) {
                    para.style_id = Some(style);
                }
            }
            b"numId" | b"ilvl" => {
                let value = attr(e, b"val").and_then(|v| v.parse::<u32>().ok());
                if let (Some(para), Some(value)) = (self.current_para.as_mut(), value) {
                    let numbering = para
                        .numbering
                        .get_or_insert(NumberingRef { num_id: 0, ilvl: 0 });
                    if name == b"numId" {
                        numbering.num_id = value;
                    } else {
                        numbering.ilvl = value;
                    }
                }
            }
            b"hyperlink" if self.current_para.is_some() => {
                self.current_hyperlink = Some(Hyperlink {
                    id: attr(e, b"id"),
                    anchor: attr(e, b"anchor"),
                    runs: Vec::new(),
                });
            }
            b"r" if self.current_para.is_some() => {
                self.current_run = Some(Run::default());
            }
            _ => {
                if let Some(run) = self.current_run.as_mut() {
                    apply_run_element(run, name, e);
                    if name == b"t" {
                        self.in_text_element = true;
                    }
                }
            }
        }
    }

    fn end(&mut self, name: &[u8]) {
        if SKIPPED.contains(&name) {
            self.skip_depth = self.skip_depth.saturating_sub(1);
            return;
        }
        if self.skip_depth > 0 {
            return;
        }

        match name {
            b"body" => {
                self.flush_paragraph();
                self.in_body = false;
            }
            b"p" => self.flush_paragraph(),
            b"t" => self.in_text_element = false,
            b"r" => {
                if let Some(run) = self.current_run.take() {
                    if run.text.is_empty() && run.note.is_none() {
                        return;
                    }
                    if let Some(hyperlink) = self.current_hyperlink.as_mut() {
                        hyperlink.runs.push(run);
                    } else if let Some(para) = self.current_para.as_mut() {
                        para.children.push(ParagraphChild::Run(run));
                    }
                }
            }
            b"hyperlink" => {
                if let Some(hyperlink) = self.current_hyperlink.take() {
                    if let Some(para) = self.current_para.as_mut() {
                        para.children.push(ParagraphChild::Hyperlink(hyperlink));
                    }
                }
            }
            _ => {}
        }
    }

    fn wants_text(&self) -> bool {
        self.skip_depth == 0 && self.in_text_element && self.current_run.is_some()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.current_run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn flush_paragraph(&mut self) {
        self.in_text_element = false;
        self.current_run = None;
        if let Some(hyperlink) = self.current_hyperlink.take() {
            if let Some(para) = self.current_para.as_mut() {
                para.children.push(ParagraphChild::Hyperlink(hyperlink));
            }
        }
        if let Some(para) = self.current_para.take() {
            self.paragraphs.push(para);
        }
    }

    fn finish(self) -> Result<Document> {
        if !self.saw_body {
            return Err(DocxError::InvalidStructure(
                "document has no body element".to_string(),
            ));
        }
        Ok(Document {
            paragraphs: self.paragraphs,
        })
    }
}

/// Apply a run-level element (property or inline content) to a run
fn apply_run_element(run: &mut Run, name: &[u8], e: &BytesStart) {
    match name {
        b"b" => run.bold = is_on(e),
        b"i" => run.italic = is_on(e),
        b"strike" | b"dstrike" => run.strike = is_on(e),
        b"vertAlign" => {
            run.vert_align = match attr(e, b"val").as_deref() {
                Some("superscript") => VertAlign::Superscript,
                Some("subscript") => VertAlign::Subscript,
                _ => VertAlign::Baseline,
            };
        }
        b"tab" => run.text.push('\t'),
        b"br" => {
            // Page and column breaks have no place in flowing HTML
            if attr(e, b"type").map_or(true, |t| t == "textWrapping") {
                run.text.push('\n');
            }
        }
        b"cr" => run.text.push('\n'),
        b"noBreakHyphen" => run.text.push('-'),
        b"footnoteReference" => run.note = Some(NoteKind::Footnote),
        b"endnoteReference" => run.note = Some(NoteKind::Endnote),
        _ => {}
    }
}

/// Toggle properties are on unless `w:val` says otherwise
fn is_on(e: &BytesStart) -> bool {
    !matches!(attr(e, b"val").as_deref(), Some("0" | "false" | "off"))
}

/// Get an attribute by local name, ignoring its namespace prefix
fn attr(e: &BytesStart, local: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == local)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::document_xml;

    fn parse_body(body: &str) -> Document {
        Document::parse(document_xml(body).as_bytes()).unwrap()
    }

    #[test]
    fn test_ignore_field_codes() {
        let doc = parse_body(
            r#"<w:p>
                <w:r><w:fldChar w:fldCharType="begin"/></w:r>
                <w:r><w:instrText>TOC \o "1-3"</w:instrText></w:r>
                <w:r><w:fldChar w:fldCharType="separate"/></w:r>
                <w:r><w:t>Table of Contents</w:t></w:r>
                <w:r><w:fldChar w:fldCharType="end"/></w:r>
            </w:p>"#,
        );

        let text = doc.plain_text();
        assert_eq!(text, "Table of Contents");
        assert!(!text.contains("TOC"));
    }

    #[test]
    fn test_parse_simple_paragraph() {
        let doc = parse_body("<w:p><w:r><w:t>Hello, world!</w:t></w:r></w:p>");
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.plain_text(), "Hello, world!");
    }

    #[test]
    fn test_parse_styled_paragraph() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs[0].style_id.as_deref(), Some("Heading2"));
    }

    #[test]
    fn test_parse_run_formatting() {
        let doc = parse_body(
            r#"<w:p><w:r>
                <w:rPr><w:b/><w:i w:val="0"/><w:strike/><w:vertAlign w:val="superscript"/></w:rPr>
                <w:t>1</w:t>
            </w:r></w:p>"#,
        );
        let run = doc.paragraphs[0].runs().next().unwrap();
        assert!(run.bold);
        assert!(!run.italic);
        assert!(run.strike);
        assert_eq!(run.vert_align, VertAlign::Superscript);
        assert_eq!(run.text, "1");
    }

    #[test]
    fn test_paragraph_mark_properties_do_not_leak() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>plain</w:t></w:r></w:p>"#,
        );
        assert!(!doc.paragraphs[0].runs().next().unwrap().bold);
    }

    #[test]
    fn test_tracked_formatting_change_is_ignored() {
        let doc = parse_body(
            r#"<w:p><w:r><w:rPr><w:rPrChange w:id="1"><w:rPr><w:b/></w:rPr></w:rPrChange></w:rPr><w:t>x</w:t></w:r></w:p>"#,
        );
        assert!(!doc.paragraphs[0].runs().next().unwrap().bold);
    }

    #[test]
    fn test_tabs_and_breaks() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t><w:br w:type="page"/><w:t>d</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.plain_text(), "a\tb\ncd");
    }

    #[test]
    fn test_preserves_whitespace_in_text() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">one </w:t></w:r><w:r><w:t>two</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.plain_text(), "one two");
    }

    #[test]
    fn test_xml_entities_in_text_are_decoded() {
        let doc = parse_body("<w:p><w:r><w:t>Fish &amp; Chips &lt;3</w:t></w:r></w:p>");
        assert_eq!(doc.plain_text(), "Fish & Chips <3");
    }

    #[test]
    fn test_parse_hyperlink() {
        let doc = parse_body(
            r#"<w:p><w:hyperlink r:id="rId4"><w:r><w:t>site</w:t></w:r></w:hyperlink><w:hyperlink w:anchor="_Ref1"><w:r><w:t>there</w:t></w:r></w:hyperlink></w:p>"#,
        );
        let para = &doc.paragraphs[0];
        assert_eq!(para.children.len(), 2);
        match &para.children[0] {
            ParagraphChild::Hyperlink(h) => {
                assert_eq!(h.id.as_deref(), Some("rId4"));
                assert_eq!(h.runs[0].text, "site");
            }
            other => panic!("Expected Hyperlink, got {:?}", other),
        }
        match &para.children[1] {
            ParagraphChild::Hyperlink(h) => assert_eq!(h.anchor.as_deref(), Some("_Ref1")),
            other => panic!("Expected Hyperlink, got {:?}", other),
        }
        assert_eq!(para.plain_text(), "sitethere");
    }

    #[test]
    fn test_note_references() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>Claim</w:t></w:r><w:r><w:rPr><w:rStyle w:val="FootnoteReference"/></w:rPr><w:footnoteReference w:id="2"/></w:r><w:r><w:endnoteReference w:id="1"/></w:r></w:p>"#,
        );
        let notes: Vec<_> = doc.paragraphs[0].runs().filter_map(|r| r.note).collect();
        assert_eq!(notes, vec![NoteKind::Footnote, NoteKind::Endnote]);
        assert!(!doc.paragraphs[0].is_empty());
    }

    #[test]
    fn test_numbering_reference() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="3"/></w:numPr></w:pPr><w:r><w:t>item</w:t></w:r></w:p>
               <w:p><w:pPr><w:numPr><w:numId w:val="0"/></w:numPr></w:pPr><w:r><w:t>not a list</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            doc.paragraphs[0].numbering,
            Some(NumberingRef { num_id: 3, ilvl: 1 })
        );
        assert!(doc.paragraphs[0].is_list_item());
        assert!(!doc.paragraphs[1].is_list_item());
    }

    #[test]
    fn test_table_paragraphs_are_flattened() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>before</w:t></w:r></w:p>
               <w:tbl><w:tr><w:tc><w:p><w:r><w:t>A1</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>B1</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
               <w:p><w:r><w:t>after</w:t></w:r></w:p>"#,
        );
        let texts: Vec<_> = doc.paragraphs.iter().map(|p| p.plain_text()).collect();
        assert_eq!(texts, vec!["before", "A1", "B1", "after"]);
    }

    #[test]
    fn test_text_boxes_and_drawings_are_skipped() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t>Body</w:t></w:r><w:r><w:drawing><wp:inline xmlns:wp="urn:wp"><w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></wp:inline></w:drawing></w:r><w:r><w:t> text</w:t></w:r></w:p>"#,
        );
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.plain_text(), "Body text");
    }

    #[test]
    fn test_empty_paragraphs() {
        let doc = parse_body(r#"<w:p/><w:p><w:r><w:t>  </w:t></w:r></w:p>"#);
        assert_eq!(doc.paragraphs.len(), 2);
        assert!(doc.paragraphs.iter().all(|p| p.is_empty()));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_empty_body() {
        let doc = parse_body("");
        assert!(doc.paragraphs.is_empty());
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_missing_body_is_invalid() {
        let result = Document::parse(br#"<?xml version="1.0"?><notes><p>hi</p></notes>"#);
        assert!(matches!(result, Err(DocxError::InvalidStructure(_))));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = Document::parse(b"<w:document><w:body><w:p></w:body>");
        assert!(matches!(result, Err(DocxError::Xml(_))));
    }
}
