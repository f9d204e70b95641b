//! # Block-to-Node Translation
//!
//! Converts one classified block into an HTML subtree.
//!
//! ## Modules
//!
//! - **`inline`**: spans to nodes, re-tokenizing bold/italic content
//! - **`list`**: `ul`/`ol` blocks
//! - **`quote`**: flat and multi-level blockquotes
//!
//! Headings, code and paragraphs are small enough to live here.

pub mod inline;
pub mod list;
pub mod quote;

use crate::error::ConvertError;
use crate::html::{HtmlNode, LeafNode, ParentNode};

use super::blocks::{
    BlockType,
    kinds::{CodeFence, Heading, Paragraph},
};

pub use inline::{inline_nodes, span_to_node};

/// Recursion budget threaded through translation.
///
/// Each emphasis level and each blockquote level spends one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    depth: usize,
    limit: usize,
}

impl Nesting {
    pub fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    /// One level deeper, or [`ConvertError::NestingTooDeep`] past the limit.
    pub fn descend(self) -> Result<Self, ConvertError> {
        self.ensure(1)?;
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }

    /// Fails unless `levels` more levels fit under the limit.
    pub fn ensure(self, levels: usize) -> Result<(), ConvertError> {
        if self.depth + levels > self.limit {
            return Err(ConvertError::NestingTooDeep { limit: self.limit });
        }
        Ok(())
    }
}

/// Translates one block. Lists with no items produce `Ok(None)`.
///
/// # Errors
/// [`ConvertError::UnsupportedBlockType`] for [`BlockType::Empty`], plus
/// anything the inline tokenizer or node model reports.
pub fn translate(
    block: &str,
    block_type: BlockType,
    nesting: Nesting,
) -> Result<Option<HtmlNode>, ConvertError> {
    log::trace!("translating {block_type:?} block");
    match block_type {
        BlockType::Heading => heading(block, nesting).map(Some),
        BlockType::Code => code(block).map(Some),
        BlockType::Quote => quote::translate_quote(block, nesting).map(Some),
        BlockType::UnorderedList => list::translate_list(block, false, nesting),
        BlockType::OrderedList => list::translate_list(block, true, nesting),
        BlockType::Paragraph => paragraph(block, nesting).map(Some),
        BlockType::Empty => Err(ConvertError::UnsupportedBlockType(block_type)),
    }
}

/// Only the first line is used; callers split stacked headings beforehand.
fn heading(block: &str, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let line = block.trim().lines().next().unwrap_or_default();
    let level = Heading::level(line).max(1);
    let children = inline_nodes(Heading::content(line), nesting)?;
    Ok(ParentNode::new(&format!("h{level}"), children)?.into())
}

fn code(block: &str) -> Result<HtmlNode, ConvertError> {
    let text = LeafNode::text(CodeFence::body(block));
    let code = ParentNode::new("code", vec![text.into()])?;
    Ok(ParentNode::new("pre", vec![code.into()])?.into())
}

fn paragraph(block: &str, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let children = inline_nodes(&Paragraph::normalize(block), nesting)?;
    Ok(ParentNode::new("p", children)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    fn html(block: &str, block_type: BlockType) -> String {
        translate(block, block_type, Nesting::new(32))
            .unwrap()
            .map(|n| n.to_html())
            .unwrap_or_default()
    }

    #[rstest]
    #[case("# Hello", "<h1>Hello</h1>")]
    #[case("### Level 3 with **bold**", "<h3>Level 3 with <b>bold</b></h3>")]
    #[case("###### Six", "<h6>Six</h6>")]
    #[case("#", "<h1></h1>")]
    fn headings(#[case] block: &str, #[case] expected: &str) {
        assert_eq!(html(block, BlockType::Heading), expected);
    }

    #[test]
    fn heading_level_is_capped_at_six() {
        assert_eq!(html("######## deep", BlockType::Heading), "<h6>## deep</h6>");
    }

    #[test]
    fn code_is_literal() {
        assert_snapshot!(
            html(
                "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```",
                BlockType::Code
            ),
            @"<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn code_drops_language_line() {
        assert_eq!(
            html("```rust\nlet x = 1;\n```", BlockType::Code),
            "<pre><code>let x = 1;\n</code></pre>"
        );
    }

    #[test]
    fn paragraph_collapses_whitespace() {
        assert_eq!(
            html(
                "This is **bolded** paragraph\ntext in a p\ntag here",
                BlockType::Paragraph
            ),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn empty_block_type_is_unsupported() {
        assert_eq!(
            translate("", BlockType::Empty, Nesting::new(32)),
            Err(ConvertError::UnsupportedBlockType(BlockType::Empty))
        );
    }

    #[test]
    fn nesting_budget() {
        let n = Nesting::new(1);
        let deeper = n.descend().unwrap();
        assert_eq!(deeper, Nesting { depth: 1, limit: 1 });
        assert_eq!(
            deeper.descend(),
            Err(ConvertError::NestingTooDeep { limit: 1 })
        );
        assert!(n.ensure(1).is_ok());
        assert!(n.ensure(2).is_err());
    }
}
