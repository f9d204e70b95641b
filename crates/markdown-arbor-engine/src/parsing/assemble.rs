use markdown_arbor_config::Config;

use crate::error::ConvertError;
use crate::html::{HtmlNode, LeafNode, ParentNode};

use super::blocks::{
    BlockType, classify,
    kinds::{Heading, Paragraph},
    segment,
};
use super::translate::{Nesting, translate};

const MERGE_MAX_WORDS: usize = 5;
const MERGE_MAX_NEXT_WORDS: usize = 2;
const MERGE_TRAILING_WORD: &str = "newlines";

/// Converts a whole document into a single `div` root.
///
/// Blocks are segmented, classified and translated in source order. A
/// document with no content becomes `<div><p></p></div>`. Any error aborts
/// the conversion; there is no partial tree.
///
/// # Errors
/// [`ConvertError::InvalidConfig`] before any parsing if `config` fails
/// [`Config::validate`].
pub fn assemble(document: &str, config: &Config) -> Result<HtmlNode, ConvertError> {
    config
        .validate()
        .map_err(|e| ConvertError::InvalidConfig(e.to_string()))?;
    let nesting = Nesting::new(config.max_nesting_depth);
    let blocks: Vec<(String, BlockType)> = segment(document)
        .into_iter()
        .map(|block| {
            let block_type = classify(&block);
            (block, block_type)
        })
        .collect();

    let mut nodes = vec![];
    let mut i = 0;
    while i < blocks.len() {
        let (block, block_type) = (&blocks[i].0, blocks[i].1);
        match block_type {
            BlockType::Empty => {}
            BlockType::Heading => nodes.extend(heading_block(block, nesting)?),
            BlockType::Paragraph => {
                let next = blocks
                    .get(i + 1)
                    .filter(|(_, t)| *t == BlockType::Paragraph)
                    .map(|(b, _)| b.as_str());
                if let Some(next) = next.filter(|n| config.merge_fragments && should_merge(block, n)) {
                    log::debug!("merging paragraph fragment {block:?} with {next:?}");
                    let merged = format!(
                        "{} {}",
                        Paragraph::normalize(block),
                        Paragraph::normalize(next)
                    );
                    nodes.extend(translate(&merged, BlockType::Paragraph, nesting)?);
                    i += 2;
                    continue;
                }
                for part in Paragraph::segments(block) {
                    nodes.extend(translate(part, BlockType::Paragraph, nesting)?);
                }
            }
            other => nodes.extend(translate(block, other, nesting)?),
        }
        i += 1;
    }

    if nodes.is_empty() {
        log::debug!("document has no content, emitting an empty paragraph");
        nodes.push(ParentNode::new("p", vec![LeafNode::text("").into()])?.into());
    }
    Ok(ParentNode::new("div", nodes)?.into())
}

/// Whether a one-line paragraph fragment should be joined with the paragraph after it.
///
/// Only a single line without terminal punctuation qualifies. It is then
/// merged if the raw block ends in whitespace, if both sides are short
/// (and the fragment does not end in a comma), or if the next paragraph is
/// just the word "newlines".
pub fn should_merge(current: &str, next: &str) -> bool {
    if current.trim().contains('\n') {
        return false;
    }
    let current_text = Paragraph::normalize(current);
    if current_text.is_empty() || Paragraph::ends_sentence(&current_text) {
        return false;
    }
    let next_text = Paragraph::normalize(next);

    let trailing_whitespace = current.ends_with(char::is_whitespace);
    let short_fragment = !current_text.ends_with(',')
        && Paragraph::word_count(&current_text) <= MERGE_MAX_WORDS
        && Paragraph::word_count(&next_text) <= MERGE_MAX_NEXT_WORDS;
    let trailing_word = next_text.eq_ignore_ascii_case(MERGE_TRAILING_WORD);

    trailing_whitespace || short_fragment || trailing_word
}

/// Emits one heading per heading line; runs of other lines between them
/// become paragraphs.
fn heading_block(block: &str, nesting: Nesting) -> Result<Vec<HtmlNode>, ConvertError> {
    let mut nodes = vec![];
    let mut text_run: Vec<&str> = vec![];

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !Heading::is_heading_line(line) {
            text_run.push(line);
            continue;
        }
        if !text_run.is_empty() {
            nodes.extend(translate(&text_run.join("\n"), BlockType::Paragraph, nesting)?);
            text_run.clear();
        }
        nodes.extend(translate(line, BlockType::Heading, nesting)?);
    }
    if !text_run.is_empty() {
        nodes.extend(translate(&text_run.join("\n"), BlockType::Paragraph, nesting)?);
    }
    Ok(nodes)
}
