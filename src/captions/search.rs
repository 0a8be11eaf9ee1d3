use std::fmt;

use crate::captions::CaptionEntry;
use crate::captions::normalize::normalize_text;

// @module: Query matching and display over caption entries

/// A caption entry matching a search query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch<'a> {
    pub entry: &'a CaptionEntry,
    /// Normalized display text
    pub text: String,
}

impl SearchMatch<'_> {
    /// Seconds to seek to
    pub fn start(&self) -> f64 {
        self.entry.start
    }

    /// `m:ss` display timestamp
    pub fn timestamp(&self) -> String {
        format_timestamp(self.entry.start)
    }
}

impl fmt::Display for SearchMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp(), self.text)
    }
}

/// Case-insensitive substring search, in source order.
///
/// The query is trimmed first; a blank query matches nothing.
pub fn search<'a>(entries: &'a [CaptionEntry], query: &str) -> Vec<SearchMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter_map(|entry| {
            let text = normalize_text(&entry.text);
            text.to_lowercase()
                .contains(&query)
                .then_some(SearchMatch { entry, text })
        })
        .collect()
}

/// Format seconds as `m:ss`; minutes are not wrapped into hours
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds.floor() as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}
