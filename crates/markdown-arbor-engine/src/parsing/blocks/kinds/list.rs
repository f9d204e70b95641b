use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*](?:\s.*)?$").unwrap());
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s*(.*)").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*(.*)").unwrap());

/// List marker syntax for `- item`, `* item` and `1. item`.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";
    /// Quoted content counts as an ordered list only for `1. ` to `9. `.
    pub const QUOTED_ORDINALS: std::ops::RangeInclusive<usize> = 1..=9;

    /// Every non-blank line is `-` or `*`, alone or followed by whitespace.
    pub fn is_unordered_block(block: &str) -> bool {
        let mut lines = block.lines().filter(|l| !l.trim().is_empty()).peekable();
        lines.peek().is_some() && lines.all(|l| UNORDERED_LINE.is_match(l))
    }

    /// Line *i* (1-based) starts with exactly `"{i}. "`; any gap fails.
    pub fn is_ordered_block(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    }

    /// The item text after the marker, or `None` if `line` carries no marker.
    pub fn item_content(line: &str, ordered: bool) -> Option<&str> {
        let re = if ordered { &ORDERED_ITEM } else { &UNORDERED_ITEM };
        re.captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Whether dequoted lines look like list content.
    pub fn looks_like_list(lines: &[&str]) -> bool {
        lines.iter().any(|line| {
            line.starts_with(Self::BULLET)
                || Self::QUOTED_ORDINALS
                    .clone()
                    .any(|i| line.starts_with(&format!("{i}. ")))
        })
    }

    /// Whether list-like dequoted lines form a bullet list rather than a numbered one.
    pub fn is_bulleted(lines: &[&str]) -> bool {
        lines.iter().any(|line| line.starts_with(Self::BULLET))
    }
}
