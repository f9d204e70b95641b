use std::sync::LazyLock;

use regex::Regex;

/// ATX heading syntax: `#` to `######` followed by a space or the end of the line.
pub struct Heading;

static HEADING_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)\A#{1,6}( |$)").unwrap());

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Whether `block` opens with a heading marker.
    pub fn opens_block(block: &str) -> bool {
        HEADING_BLOCK.is_match(block)
    }

    /// Number of leading `#` characters.
    pub fn marker_run(line: &str) -> usize {
        line.chars().take_while(|&c| c == Self::MARKER).count()
    }

    /// Heading level for a line, capped at [`Heading::MAX_LEVEL`].
    pub fn level(line: &str) -> usize {
        Self::marker_run(line).min(Self::MAX_LEVEL)
    }

    /// Whether a line inside a heading block is itself a heading line.
    ///
    /// The `#` run must be followed by a space or end the line, so `#tag` is text.
    pub fn is_heading_line(line: &str) -> bool {
        let run = Self::marker_run(line);
        run > 0 && matches!(line[run..].chars().next(), None | Some(' '))
    }

    /// The heading text: markers removed, surrounding whitespace trimmed.
    pub fn content(line: &str) -> &str {
        line[Self::level(line)..].trim()
    }
}
