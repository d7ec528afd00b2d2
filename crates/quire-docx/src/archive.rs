//! Archive handling for DOCX files
//!
//! DOCX files are ZIP archives containing XML parts and resources. Only the
//! main document part and its relationships are ever inflated; styles,
//! headers, media and anything else in the package are left compressed.

use std::io::{Cursor, Read, Seek};

use zip::read::ZipArchive;
use zip::result::ZipError;

use crate::error::{DocxError, Result};

/// Largest single XML part accepted from an uploaded archive
pub const MAX_PART_SIZE: u64 = 32 * 1024 * 1024;

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Path of the main document's relationships part
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// The parts of a DOCX needed to render it
#[derive(Debug)]
pub struct DocxArchive {
    document: Vec<u8>,
    document_rels: Option<Vec<u8>>,
}

impl DocxArchive {
    /// Unpack a DOCX held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_reader_with_limit(reader, MAX_PART_SIZE)
    }

    /// Create from a reader, rejecting any needed part larger than `limit`
    pub fn from_reader_with_limit<R: Read + Seek>(reader: R, limit: u64) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let document = read_part(&mut archive, DOCUMENT_PART, limit)?
            .ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?;
        let document_rels = read_part(&mut archive, DOCUMENT_RELS_PART, limit)?;

        Ok(Self {
            document,
            document_rels,
        })
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> &[u8] {
        &self.document
    }

    /// Get the document relationships (word/_rels/document.xml.rels)
    pub fn document_rels_xml(&self) -> Option<&[u8]> {
        self.document_rels.as_deref()
    }
}

/// Inflate one part, or `None` when the archive does not contain it
fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
    limit: u64,
) -> Result<Option<Vec<u8>>> {
    let file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if file.size() > limit {
        return Err(too_large(name, limit));
    }

    // The declared size can lie; cap what is actually inflated.
    let mut contents = Vec::new();
    file.take(limit + 1).read_to_end(&mut contents)?;
    if contents.len() as u64 > limit {
        return Err(too_large(name, limit));
    }
    Ok(Some(contents))
}

fn too_large(name: &str, limit: u64) -> DocxError {
    DocxError::InvalidStructure(format!("part {} exceeds {} bytes", name, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{docx_from_body, docx_from_parts};

    #[test]
    fn test_from_bytes_reads_document_and_rels() {
        let bytes = docx_from_body("<w:p><w:r><w:t>Hi</w:t></w:r></w:p>").unwrap();
        let archive = DocxArchive::from_bytes(&bytes).unwrap();

        assert!(archive.document_rels_xml().is_some());
        let xml = String::from_utf8_lossy(archive.document_xml());
        assert!(xml.contains("<w:t>Hi</w:t>"));
    }

    #[test]
    fn test_rels_are_optional() {
        let bytes = docx_from_parts(&[
            (DOCUMENT_PART, b"<w:document/>".as_slice()),
            ("word/media/image1.png", b"\x89PNG".as_slice()),
        ])
        .unwrap();
        let archive = DocxArchive::from_bytes(&bytes).unwrap();

        assert_eq!(archive.document_xml(), b"<w:document/>");
        assert!(archive.document_rels_xml().is_none());
    }

    #[test]
    fn test_other_parts_are_not_inflated() {
        let filler = vec![b'x'; 4096];
        let names: Vec<String> = (0..200).map(|i| format!("word/header{}.xml", i)).collect();
        let mut parts: Vec<(&str, &[u8])> = names
            .iter()
            .map(|name| (name.as_str(), filler.as_slice()))
            .collect();
        parts.push((DOCUMENT_PART, b"<w:document/>".as_slice()));
        let bytes = docx_from_parts(&parts).unwrap();

        // Each filler part is over the limit; only the document part is read.
        let archive = DocxArchive::from_reader_with_limit(Cursor::new(bytes), 1024).unwrap();
        assert_eq!(archive.document_xml(), b"<w:document/>");
    }

    #[test]
    fn test_oversized_document_part() {
        let body = vec![b' '; 2048];
        let bytes = docx_from_parts(&[(DOCUMENT_PART, body.as_slice())]).unwrap();

        let result = DocxArchive::from_reader_with_limit(Cursor::new(bytes), 1024);
        assert!(matches!(result, Err(DocxError::InvalidStructure(_))));
    }

    #[test]
    fn test_missing_document_part() {
        let bytes = docx_from_parts(&[("word/styles.xml", b"<w:styles/>".as_slice())]).unwrap();

        match DocxArchive::from_bytes(&bytes) {
            Err(DocxError::MissingPart(part)) => assert_eq!(part, DOCUMENT_PART),
            other => panic!("Expected MissingPart, got {:?}", other),
        }
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxArchive::from_bytes(b"plain text, not a document");
        assert!(matches!(result, Err(DocxError::Archive(_))));
    }

    #[test]
    fn test_empty_buffer() {
        assert!(DocxArchive::from_bytes(&[]).is_err());
    }
}
