//! Article filename derivation
//!
//! Titles become short routing segments such as `quick-brown.html`. The
//! result depends on the title alone; uniqueness within an issue is the
//! storage layer's concern.

/// Words dropped from multi-word titles
pub const STOP_WORDS: &[&str] = &["a", "the", "of", "in", "on", "at", "to", "for", "and", "or"];

/// Number of significant words kept
const MAX_WORDS: usize = 2;

/// Derive an article filename from its title
///
/// A title that is a single token once trimmed is lowercased as-is, with
/// no punctuation stripping or stop-word filtering. Otherwise punctuation
/// is removed, stop words are dropped and the first two remaining words
/// are joined with `-`. Always ends in `.html`; a title made only of stop
/// words yields `.html`.
pub fn slugify(title: &str) -> String {
    let trimmed = title.trim();
    if !trimmed.chars().any(char::is_whitespace) {
        return format!("{}.html", trimmed.to_lowercase());
    }

    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .take(MAX_WORDS)
        .collect();

    format!("{}.html", words.join("-"))
}

/// ASCII letters, digits and underscore
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
