use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Paragraph block type.
///
/// Paragraphs have no delimiters. They are the fallback when no other
/// block rule matches, and their text is inline-tokenized.
pub struct Paragraph;

impl Paragraph {
    /// Sentence-ending characters. A line ending in one is never a fragment.
    pub const TERMINAL_PUNCTUATION: [char; 5] = ['.', '!', '?', ':', ';'];

    /// Trims and collapses every whitespace run, newlines included, to one space.
    pub fn normalize(text: &str) -> String {
        WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
    }

    /// Splits on runs of blank lines, dropping empty segments.
    pub fn segments(block: &str) -> impl Iterator<Item = &str> {
        PARAGRAPH_BREAK
            .split(block)
            .filter(|segment| !segment.trim().is_empty())
    }

    pub fn ends_sentence(text: &str) -> bool {
        text.ends_with(Self::TERMINAL_PUNCTUATION)
    }

    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_newlines() {
        assert_eq!(
            Paragraph::normalize("  This is\ntext   in a\tp  "),
            "This is text in a p"
        );
    }

    #[test]
    fn segments_skip_blank_runs() {
        let parts: Vec<_> = Paragraph::segments("one\n\n\ntwo\n\n").collect();
        assert_eq!(parts, vec!["one", "two"]);
    }

    #[test]
    fn sentence_endings() {
        assert!(Paragraph::ends_sentence("Done."));
        assert!(Paragraph::ends_sentence("Really?"));
        assert!(Paragraph::ends_sentence("As follows:"));
        assert!(!Paragraph::ends_sentence("and then"));
        assert!(!Paragraph::ends_sentence("a list,"));
    }
}
