/// Blockquote syntax: every line carries one or more `>` prefixes.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth += 1;
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Removes a single `>` and trims the remainder.
    pub fn strip_one(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// Whether every non-blank line of `block` is quoted.
    pub fn is_quote_block(block: &str) -> bool {
        let mut lines = block.lines().filter(|l| !l.trim().is_empty()).peekable();
        lines.peek().is_some() && lines.all(|l| l.trim_start().starts_with(Self::PREFIX))
    }

    /// Whether a quote block needs the multi-level treatment.
    ///
    /// Any quote spanning several lines takes this path, as does `> >` on one line.
    pub fn needs_nesting(block: &str) -> bool {
        block.contains("> >") || block.contains("\n>")
    }
}
