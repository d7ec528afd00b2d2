//! HTML entity unescaping
//!
//! Decodes a fixed set of character references. Every other entity-like
//! token, named or numeric, is left exactly as written.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Decode `&lt;`, `&gt;`, `&amp;`, `&quot;`, `&#39;` and `&apos;`
///
/// Substitution happens in a single left-to-right pass: an `&` produced by
/// decoding `&amp;` is never read as the start of another reference, so
/// `&amp;lt;` becomes `&lt;`, not `<`.
pub fn unescape(text: &str) -> String {
    static ENTITY_RE: OnceLock<Regex> = OnceLock::new();
    let re = ENTITY_RE.get_or_init(|| Regex::new(r"&(?:lt|gt|amp|quot|#39|apos);").unwrap());

    re.replace_all(text, |caps: &Captures| match &caps[0] {
        "&lt;" => "<",
        "&gt;" => ">",
        "&amp;" => "&",
        "&quot;" => "\"",
        _ => "'",
    })
    .into_owned()
}
