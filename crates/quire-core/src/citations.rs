//! Citation block construction
//!
//! A citations document holds one citation per paragraph. Paragraph `n`
//! becomes block `f{n}`, linked back to footnote marker `fl{n}` in the
//! article body.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::footnotes::{citation_id, marker_id};
use crate::highlight::HighlightSettings;

/// Build citation blocks using the default highlight behaviour
pub fn build_citations(html: &str) -> String {
    build_citations_with(html, &HighlightSettings::default())
}

/// Build citation blocks
///
/// Splits on `<p>`/`</p>`, drops segments that are blank after trimming
/// and wraps each survivor, in order, as
/// `<p class='text footnote' id='f{n}' onclick="...">…</p>` followed by a
/// newline. Returns an empty string when nothing survives.
pub fn build_citations_with(html: &str, highlight: &HighlightSettings) -> String {
    static PARA_RE: OnceLock<Regex> = OnceLock::new();
    let re = PARA_RE.get_or_init(|| Regex::new(r"</?p>").unwrap());

    let mut out = String::new();
    let segments = re.split(html).map(str::trim).filter(|s| !s.is_empty());

    let mut count = 0;
    for (index, segment) in segments.enumerate() {
        let n = index + 1;
        out.push_str(&format!(
            "<p class='text footnote' id='{}' onclick=\"{}\">{}</p>\n",
            citation_id(n),
            highlight.onclick(&marker_id(n)),
            segment
        ));
        count = n;
    }

    debug!("Built {} citation blocks", count);
    out
}
