//! Structure extractors: free text into typed content for one layout family.
//!
//! Every extractor is best-effort. Text that does not match yields an empty
//! structure, never an error.

use crate::bullets::extract_bullet_points;
use crate::types::{
    ChartKind, ChartStructure, ComparisonStructure, ProcessStructure, TwoColumnStructure,
};
use regex::Regex;
use std::sync::LazyLock;

/// Comparison keywords, in priority order.
pub const COMPARISON_KEYWORDS: &[&str] = &["vs", "versus", "compared to", "compared with"];

/// Case-insensitive matchers for [`COMPARISON_KEYWORDS`], same order.
static COMPARISON_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COMPARISON_KEYWORDS
        .iter()
        .map(|kw| Regex::new(&format!("(?i){}", regex::escape(kw))).unwrap())
        .collect()
});

static PERCENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)%").unwrap());

static GROWTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:increased|grew|growth)\s+(?:by\s+)?(\d+)").unwrap()
});

/// A single Unicode decimal digit (general category Nd).
static DECIMAL_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

/// Explicitly numbered item: "N. text" up to end of line.
static NUMBERED_STEP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.\s*(.+)").unwrap());

/// Minimum newline count before a two-column split is considered.
pub const TWO_COLUMN_MIN_NEWLINES: usize = 4;

/// Minimum line count before a two-column split is considered.
pub const TWO_COLUMN_MIN_LINES: usize = 6;

/// Each column must be longer than this many characters.
pub const TWO_COLUMN_MIN_CHARS: usize = 20;

/// Split content into the two sides of a comparison.
///
/// Splits once, at the first occurrence of the first keyword (in
/// [`COMPARISON_KEYWORDS`] order) present. A side without bullet points
/// falls back to its non-blank lines.
pub fn extract_comparison(content: &str) -> ComparisonStructure {
    let Some(found) = COMPARISON_REGEXES.iter().find_map(|re| re.find(content)) else {
        return ComparisonStructure::general(Vec::new(), Vec::new());
    };

    let left = &content[..found.start()];
    let right = &content[found.end()..];

    let comparison = ComparisonStructure::general(side_points(left), side_points(right));
    log::trace!(
        "comparison split on {:?}: {} left, {} right",
        found.as_str(),
        comparison.left_side.len(),
        comparison.right_side.len()
    );
    comparison
}

fn side_points(part: &str) -> Vec<String> {
    let points = extract_bullet_points(part);
    if !points.is_empty() {
        return points;
    }

    part.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract a chart series from numeric phrases.
///
/// Percentages win over growth phrases when both are present.
pub fn extract_chart_data(content: &str) -> ChartStructure {
    let percentages = capture_values(&PERCENT_REGEX, content);
    if !percentages.is_empty() {
        log::trace!("chart percentages: {:?}", percentages);
        return ChartStructure::labelled(ChartKind::Pie, "Category", percentages);
    }

    let growth = capture_values(&GROWTH_REGEX, &content.to_lowercase());
    if !growth.is_empty() {
        log::trace!("chart growth values: {:?}", growth);
        return ChartStructure::labelled(ChartKind::Column, "Growth", growth);
    }

    ChartStructure::default()
}

fn capture_values(re: &Regex, text: &str) -> Vec<i64> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| parse_decimal(m.as_str()))
        .collect()
}

/// Value of a Unicode decimal digit.
///
/// Nd digits come in contiguous runs of ten starting at zero, so the value
/// is the number of digits directly below `c` in its run, modulo ten.
fn decimal_digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }

    let is_digit = |c: char| {
        let mut buf = [0u8; 4];
        DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut buf))
    };

    let mut below = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        below += 1;
        code -= 1;
    }
    below % 10
}

/// Parse a run of decimal digits, saturating at `i64::MAX`.
fn parse_decimal(digits: &str) -> i64 {
    digits
        .chars()
        .try_fold(0i64, |acc, c| {
            acc.checked_mul(10)?.checked_add(i64::from(decimal_digit_value(c)))
        })
        .unwrap_or(i64::MAX)
}

/// Extract ordered process steps.
///
/// Explicit "N. text" numbering is preferred; otherwise bullet points are
/// used as the steps.
pub fn extract_process_steps(content: &str) -> ProcessStructure {
    let numbered: Vec<String> = NUMBERED_STEP_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    if !numbered.is_empty() {
        log::trace!("process: {} numbered step(s)", numbered.len());
        return ProcessStructure::from_steps(numbered);
    }

    let points = extract_bullet_points(content);
    log::trace!("process: {} bullet step(s)", points.len());
    ProcessStructure::from_steps(points)
}

/// Split content at its line midpoint into two columns.
///
/// Returns `None` when the content is too short to split or either half
/// is 20 characters or fewer.
pub fn split_two_columns(content: &str) -> Option<TwoColumnStructure> {
    let lines: Vec<&str> = content.split('\n').collect();
    if content.matches('\n').count() < TWO_COLUMN_MIN_NEWLINES
        || lines.len() < TWO_COLUMN_MIN_LINES
    {
        return None;
    }

    let mid = lines.len() / 2;
    let left_column = lines[..mid].join("\n");
    let right_column = lines[mid..].join("\n");

    if left_column.chars().count() > TWO_COLUMN_MIN_CHARS
        && right_column.chars().count() > TWO_COLUMN_MIN_CHARS
    {
        Some(TwoColumnStructure {
            left_column,
            right_column,
        })
    } else {
        None
    }
}
