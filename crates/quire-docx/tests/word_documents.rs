//! Extraction tests against documents shaped like real Word output
//!
//! Word scatters revision IDs, proofing marks, bookmarks and section
//! properties through the body; none of that may leak into the output.

use std::io::{Cursor, Write};

use quire_docx::DocxExtractor;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Package a body as the only part of a DOCX
fn docx_from_body(body: &str) -> zip::result::ZipResult<Vec<u8>> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>{}</w:body>
</w:document>"#,
        body
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("word/document.xml", SimpleFileOptions::default())?;
    zip.write_all(document.as_bytes())?;
    Ok(zip.finish()?.into_inner())
}

const ESSAY_BODY: &str = r#"
<w:p w:rsidR="00A1" w:rsidRDefault="00A1">
  <w:pPr><w:pStyle w:val="Heading1"/></w:pPr>
  <w:bookmarkStart w:id="0" w:name="_Toc1"/>
  <w:r><w:t>On Beauty</w:t></w:r>
  <w:bookmarkEnd w:id="0"/>
</w:p>
<w:p w:rsidR="00A1" w:rsidRDefault="00B2">
  <w:r w:rsidRPr="00C3"><w:t xml:space="preserve">Beauty is </w:t></w:r>
  <w:proofErr w:type="spellStart"/>
  <w:r><w:rPr><w:i/></w:rPr><w:t>kalon</w:t></w:r>
  <w:proofErr w:type="spellEnd"/>
  <w:r><w:t>, or so the Greeks said</w:t></w:r>
  <w:r><w:rPr><w:vertAlign w:val="superscript"/></w:rPr><w:t>1</w:t></w:r>
  <w:r><w:t>.</w:t></w:r>
</w:p>
<w:p w:rsidR="00A1" w:rsidRDefault="00B2"/>
<w:p>
  <w:r><w:t>It is “good” – and it is … rare</w:t></w:r>
  <w:r><w:rPr><w:vertAlign w:val="superscript"/></w:rPr><w:t>2</w:t></w:r>
</w:p>
<w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>
"#;

#[test]
fn test_essay_to_html() {
    let bytes = docx_from_body(ESSAY_BODY).unwrap();
    let html = DocxExtractor::new().to_html(&bytes).unwrap();

    assert_eq!(
        html,
        "<h1>On Beauty</h1>\
         <p>Beauty is <em>kalon</em>, or so the Greeks said<sup>1</sup>.</p>\
         <p>It is “good” – and it is … rare<sup>2</sup></p>"
    );
}

#[test]
fn test_essay_to_raw_text() {
    let bytes = docx_from_body(ESSAY_BODY).unwrap();
    let text = DocxExtractor::new().to_raw_text(&bytes).unwrap();

    assert_eq!(
        text,
        "On Beauty\n\nBeauty is kalon, or so the Greeks said1.\n\n\n\nIt is “good” – and it is … rare2"
    );
}

#[test]
fn test_tracked_changes_keep_insertions_and_drop_deletions() {
    let bytes = docx_from_body(
        r#"<w:p>
            <w:r><w:t xml:space="preserve">The </w:t></w:r>
            <w:del w:id="1" w:author="Ed"><w:r><w:delText>old</w:delText></w:r></w:del>
            <w:ins w:id="2" w:author="Ed"><w:r><w:t>new</w:t></w:r></w:ins>
            <w:r><w:t xml:space="preserve"> text</w:t></w:r>
        </w:p>"#,
    )
    .unwrap();

    let html = DocxExtractor::new().to_html(&bytes).unwrap();
    assert_eq!(html, "<p>The new text</p>");
}

#[test]
fn test_extraction_is_deterministic() {
    let bytes = docx_from_body(ESSAY_BODY).unwrap();
    let extractor = DocxExtractor::new();
    assert_eq!(
        extractor.to_html(&bytes).unwrap(),
        extractor.to_html(&bytes).unwrap()
    );
}
