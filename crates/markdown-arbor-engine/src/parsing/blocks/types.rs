/// The type of a top-level block, decided by [`classify`](super::classify::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` followed by a space or the end of the line.
    Heading,
    /// Triple-backtick fenced code.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `-` or `*`.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
    /// Anything else with content.
    Paragraph,
    /// Whitespace only. Dropped before translation.
    Empty,
}
