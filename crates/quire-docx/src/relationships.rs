//! Relationship parsing for DOCX documents
//!
//! `word/_rels/document.xml.rels` maps relationship IDs to targets. Hyperlinks
//! in the body carry an `r:id` that resolves to their URL through this map.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{DocxError, Result};

/// Parsed relationships from a .rels file
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    map: HashMap<String, RelationshipTarget>,
}

/// A relationship target with its type
#[derive(Debug, Clone)]
struct RelationshipTarget {
    /// The target URL or path
    target: String,
    /// The relationship type URI (e.g., hyperlink, image, styles)
    rel_type: String,
}

impl Relationships {
    /// Hyperlink relationship type
    pub const TYPE_HYPERLINK: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse relationships from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut map = HashMap::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"Relationship" {
                        let mut id = None;
                        let mut target = None;
                        let mut rel_type = None;

                        for attr in e.attributes().filter_map(|a| a.ok()) {
                            let value = attr.unescape_value().ok().map(|s| s.to_string());
                            match attr.key.as_ref() {
                                b"Id" => id = value,
                                b"Target" => target = value,
                                b"Type" => rel_type = value,
                                _ => {}
                            }
                        }

                        if let (Some(id), Some(target)) = (id, target) {
                            map.insert(
                                id,
                                RelationshipTarget {
                                    target,
                                    rel_type: rel_type.unwrap_or_default(),
                                },
                            );
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { map })
    }

    /// Resolve a hyperlink relationship to its URL
    ///
    /// Returns `None` when the ID is unknown or is not a hyperlink.
    pub fn hyperlink_target(&self, id: &str) -> Option<&str> {
        self.map
            .get(id)
            .filter(|r| r.rel_type == Self::TYPE_HYPERLINK)
            .map(|r| r.target.as_str())
    }

    /// Get the number of relationships
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no relationships
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
