//! Bullet point extraction from free text.
//!
//! A line counts as a point when it starts with a list marker or mentions
//! an emphasis word anywhere. The second condition also picks up ordinary
//! sentences such as "This is the key insight"; callers rely on that.

use regex::Regex;
use std::sync::LazyLock;

/// Leading run of bullet glyphs, digits, dots and whitespace.
static MARKER_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*\d.\s]+").unwrap());

/// Line prefixes that mark a list item. Only the first three numerals count.
const LIST_MARKERS: &[&str] = &["•", "-", "*", "1.", "2.", "3."];

/// Words that promote any line to a point.
const EMPHASIS_WORDS: &[&str] = &["important", "key", "main", "primary"];

/// Whether a trimmed line is selected as a point.
fn is_point_line(line: &str) -> bool {
    if LIST_MARKERS.iter().any(|marker| line.starts_with(marker)) {
        return true;
    }

    let lower = line.to_lowercase();
    EMPHASIS_WORDS.iter().any(|word| lower.contains(word))
}

/// Strip any leading marker run from a point.
fn strip_marker(line: &str) -> String {
    MARKER_PREFIX_REGEX.replace(line, "").trim().to_string()
}

/// Extract points from a text block, in source order.
///
/// Never yields more points than the text has lines. Duplicates are kept.
pub fn extract_bullet_points(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_point_line(line))
        .map(strip_marker)
        .filter(|point| !point.is_empty())
        .collect()
}
