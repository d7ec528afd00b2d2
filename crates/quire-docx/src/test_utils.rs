//! Fixture builders for DOCX buffers
//!
//! Used by the tests of this crate and of the crates that consume it.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::archive::{DOCUMENT_PART, DOCUMENT_RELS_PART};
use crate::error::Result;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const EMPTY_DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
</Relationships>"#;

/// Wrap body XML (paragraphs, tables) in a complete `word/document.xml`
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <w:body>{}</w:body>
</w:document>"#,
        body
    )
}

/// Build a minimal DOCX whose body is the given XML
///
/// # Example
/// ```
/// use quire_docx::test_utils::docx_from_body;
/// let bytes = docx_from_body("<w:p><w:r><w:t>Hello</w:t></w:r></w:p>").unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub fn docx_from_body(body: &str) -> Result<Vec<u8>> {
    docx_with_rels(body, EMPTY_DOCUMENT_RELS)
}

/// Build a minimal DOCX with a custom `word/_rels/document.xml.rels`
pub fn docx_with_rels(body: &str, rels_xml: &str) -> Result<Vec<u8>> {
    let document = document_xml(body);
    docx_from_parts(&[
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS.as_bytes()),
        (DOCUMENT_RELS_PART, rels_xml.as_bytes()),
        (DOCUMENT_PART, document.as_bytes()),
    ])
}

/// Build a ZIP archive from raw `(path, contents)` pairs
pub fn docx_from_parts(parts: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, contents) in parts {
        zip.start_file(*path, options)?;
        zip.write_all(contents)?;
    }

    zip.finish()?;
    Ok(buffer.into_inner())
}
