use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};
use super::types::BlockType;

/// Classifies a block by ordered pattern matching; the first rule that matches wins.
///
/// 1. Heading, 2. Code, 3. Quote, 4. Unordered list, 5. Ordered list,
/// 6. Paragraph. Whitespace-only blocks are [`BlockType::Empty`].
pub fn classify(block: &str) -> BlockType {
    let block_type = if block.trim().is_empty() {
        BlockType::Empty
    } else if Heading::opens_block(block) {
        BlockType::Heading
    } else if CodeFence::is_closed_block(block) {
        BlockType::Code
    } else if BlockQuote::is_quote_block(block) {
        BlockType::Quote
    } else if ListMarker::is_unordered_block(block) {
        BlockType::UnorderedList
    } else if ListMarker::is_ordered_block(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    };
    log::trace!("classified block as {block_type:?}");
    block_type
}
