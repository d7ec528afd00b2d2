//! Footnote marker linking for article bodies
//!
//! Each bare `<sup>` in the baseline markup becomes a clickable marker
//! `fl{n}` that jumps to citation block `f{n}`.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::highlight::HighlightSettings;

/// Id of the in-body marker for footnote `n`
pub fn marker_id(n: usize) -> String {
    format!("fl{}", n)
}

/// Id of the citation block for footnote `n`
pub fn citation_id(n: usize) -> String {
    format!("f{}", n)
}

/// Link footnote markers using the default highlight behaviour
pub fn link_footnotes(html: &str) -> String {
    link_footnotes_with(html, &HighlightSettings::default())
}

/// Link footnote markers
///
/// The n-th `<sup>` in document order (1-based) receives class
/// `footnoteLink`, id `fl{n}` and a handler targeting `f{n}`. Numbering
/// never skips, even for empty superscripts. Input without `<sup>` is
/// returned unchanged.
pub fn link_footnotes_with(html: &str, highlight: &HighlightSettings) -> String {
    static SUP_RE: OnceLock<Regex> = OnceLock::new();
    let re = SUP_RE.get_or_init(|| Regex::new(r"<sup>").unwrap());

    let mut count = 0;
    let linked = re.replace_all(html, |_: &regex::Captures| {
        count += 1;
        format!(
            "<sup class='footnoteLink' id='{}' onclick=\"{}\">",
            marker_id(count),
            highlight.onclick(&citation_id(count))
        )
    });

    debug!("Linked {} footnote markers", count);
    linked.into_owned()
}
