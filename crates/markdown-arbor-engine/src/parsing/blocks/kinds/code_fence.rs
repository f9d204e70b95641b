/// Fenced code block syntax.
///
/// A fence is a line starting with three backticks. A block that opens with a
/// fence and closes with one is code: no block or inline parsing inside it.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether `line` is a fence line (opening or closing).
    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::FENCE)
    }

    /// Whether `block` starts and ends with a fence.
    pub fn is_closed_block(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The literal code between the fences.
    ///
    /// The rest of the opening fence line (a language identifier, if any) is
    /// dropped along with both fences.
    pub fn body(block: &str) -> &str {
        let content = block.trim();
        let content = content.strip_prefix(Self::FENCE).unwrap_or(content);
        let content = content.strip_suffix(Self::FENCE).unwrap_or(content);
        match content.find('\n') {
            Some(nl) => &content[nl + 1..],
            None => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_lines() {
        assert!(CodeFence::is_fence("```rust"));
        assert!(CodeFence::is_fence("   ```"));
        assert!(!CodeFence::is_fence("`` not a fence"));
    }

    #[test]
    fn closed_block_needs_two_fences() {
        assert!(CodeFence::is_closed_block("```\ncode\n```"));
        assert!(!CodeFence::is_closed_block("```"));
        assert!(!CodeFence::is_closed_block("```\nunterminated"));
    }

    #[test]
    fn body_drops_fences_and_language() {
        assert_eq!(CodeFence::body("```\nline one\nline two\n```"), "line one\nline two\n");
        assert_eq!(CodeFence::body("```rust\nfn main() {}\n```"), "fn main() {}\n");
    }

    #[test]
    fn body_of_empty_block() {
        assert_eq!(CodeFence::body("```\n```"), "");
        assert_eq!(CodeFence::body("``````"), "");
    }
}
