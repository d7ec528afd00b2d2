//! Click-to-highlight behaviour for footnote cross-links
//!
//! Footnote markers and citation blocks carry an inline `onclick` handler
//! that scrolls the paired element into view, a fraction of the viewport
//! below the top edge, and highlights it for a short while.

use serde::{Deserialize, Serialize};

/// Parameters of the scroll-and-highlight handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Fraction of the viewport height left above the target after scrolling
    pub viewport_offset: f64,
    /// How long the highlight stays on, in milliseconds
    pub duration_ms: u64,
    /// CSS background colour while highlighted
    pub background: String,
    /// CSS font size while highlighted
    pub font_size: String,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            viewport_offset: 0.22,
            duration_ms: 3000,
            background: "yellow".to_string(),
            font_size: "x-large".to_string(),
        }
    }
}

impl HighlightSettings {
    /// JavaScript for an `onclick` attribute targeting the element `target_id`
    ///
    /// The script only uses single quotes, so it can sit inside a
    /// double-quoted attribute. `target_id` must be a plain identifier.
    pub fn onclick(&self, target_id: &str) -> String {
        format!(
            "(function(){{var e=document.getElementById('{id}');if(!e)return;\
             window.scrollTo({{top:e.getBoundingClientRect().top+window.pageYOffset-window.innerHeight*{offset},behavior:'smooth'}});\
             e.style.backgroundColor='{bg}';e.style.fontSize='{size}';\
             setTimeout(function(){{e.style.backgroundColor='unset';e.style.fontSize='unset';}},{ms});}})()",
            id = target_id,
            offset = self.offset(),
            bg = css_token(&self.background, "yellow"),
            size = css_token(&self.font_size, "x-large"),
            ms = self.duration_ms,
        )
    }

    fn offset(&self) -> f64 {
        if self.viewport_offset.is_finite() {
            self.viewport_offset.clamp(0.0, 1.0)
        } else {
            0.22
        }
    }
}

/// Keep a configured CSS value only if it cannot break out of the script
fn css_token<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '-' | '.' | '%' | '(' | ')' | ',' | ' '));
    if safe {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handler() {
        let js = HighlightSettings::default().onclick("f3");

        assert!(js.contains("document.getElementById('f3')"));
        assert!(js.contains("window.innerHeight*0.22"));
        assert!(js.contains("behavior:'smooth'"));
        assert!(js.contains("e.style.backgroundColor='yellow'"));
        assert!(js.contains("e.style.fontSize='x-large'"));
        assert!(js.ends_with("},3000);})()"));
        assert!(!js.contains('"'));
    }

    #[test]
    fn test_custom_settings() {
        let settings = HighlightSettings {
            viewport_offset: 0.5,
            duration_ms: 1500,
            background: "#ffeb3b".to_string(),
            font_size: "120%".to_string(),
        };
        let js = settings.onclick("fl1");

        assert!(js.contains("window.innerHeight*0.5"));
        assert!(js.contains("backgroundColor='#ffeb3b'"));
        assert!(js.contains("fontSize='120%'"));
        assert!(js.contains("},1500);"));
    }

    #[test]
    fn test_unsafe_css_values_fall_back() {
        let settings = HighlightSettings {
            background: "red';alert(1);'".to_string(),
            font_size: "\"big\"".to_string(),
            ..HighlightSettings::default()
        };
        let js = settings.onclick("f1");

        assert!(js.contains("backgroundColor='yellow'"));
        assert!(js.contains("fontSize='x-large'"));
        assert!(!js.contains("alert"));
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut settings = HighlightSettings {
            viewport_offset: 4.0,
            ..HighlightSettings::default()
        };
        assert!(settings.onclick("f1").contains("innerHeight*1,"));

        settings.viewport_offset = f64::NAN;
        assert!(settings.onclick("f1").contains("innerHeight*0.22,"));
    }
}
