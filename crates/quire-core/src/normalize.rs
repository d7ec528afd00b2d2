//! Typographic normalization
//!
//! Word processors emit curly quotes, dashes and other typographic
//! punctuation; the site renders plain ASCII equivalents.

use crate::entities::unescape;

/// Unescape entities, then map typographic punctuation to ASCII
///
/// | Character | Replacement |
/// |---|---|
/// | `“` `”` | `"` |
/// | `‘` `’` | `'` |
/// | `–` `—` | `-` |
/// | `…` | `...` |
/// | `•` | `*` |
/// | no-break space | space |
pub fn normalize(text: &str) -> String {
    let unescaped = unescape(text);
    let mut out = String::with_capacity(unescaped.len());

    for c in unescaped.chars() {
        match c {
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('*'),
            '\u{00A0}' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Collapse every whitespace run to one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
