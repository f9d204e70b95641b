use crate::error::ConvertError;
use crate::html::{HtmlError, HtmlNode, ParentNode};
use crate::parsing::blocks::kinds::{BlockQuote, ListMarker};

use super::{Nesting, inline_nodes, list::translate_list};

/// Translates a quote block into a (possibly nested) `blockquote`.
///
/// A single line is a flat quote. Anything with a second line or a
/// `> >` marker goes through the level-grouping path, where each depth
/// becomes one `blockquote` wrapping the next deeper one.
pub fn translate_quote(block: &str, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let block = block.trim();
    if BlockQuote::needs_nesting(block) {
        return nested_quote(block, nesting);
    }
    let lines: Vec<&str> = block.lines().map(BlockQuote::strip_one).collect();
    let children = level_children(&lines, nesting)?;
    Ok(ParentNode::from_optional("blockquote", children)?.into())
}

/// Content of one quote level: a list if any line looks like an item,
/// otherwise the lines joined with spaces as inline text.
fn level_children(lines: &[&str], nesting: Nesting) -> Result<Vec<Option<HtmlNode>>, ConvertError> {
    if ListMarker::looks_like_list(lines) {
        let ordered = !ListMarker::is_bulleted(lines);
        return Ok(vec![translate_list(&lines.join("\n"), ordered, nesting)?]);
    }
    Ok(inline_nodes(&lines.join(" "), nesting)?
        .into_iter()
        .map(Some)
        .collect())
}

/// Groups consecutive lines by quote depth, keeping source order.
///
/// Lines with no marker at all are folded into depth one.
fn group_levels(block: &str) -> Vec<(usize, Vec<&str>)> {
    let mut groups: Vec<(usize, Vec<&str>)> = vec![];
    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (depth, offset) = BlockQuote::strip_prefixes(line);
        let depth = depth.max(1);
        let content = line[offset..].trim();
        match groups.last_mut() {
            Some((d, lines)) if *d == depth => lines.push(content),
            _ => groups.push((depth, vec![content])),
        }
    }
    groups
}

fn nested_quote(block: &str, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let groups = group_levels(block);
    let max_depth = groups.iter().map(|(d, _)| *d).max().unwrap_or(1);
    nesting.ensure(max_depth)?;
    log::debug!("building blockquote with {max_depth} levels");

    let mut inner: Option<HtmlNode> = None;
    for depth in (1..=max_depth).rev() {
        let lines: Vec<&str> = groups
            .iter()
            .filter(|(d, _)| *d == depth)
            .flat_map(|(_, lines)| lines.iter().copied())
            .filter(|l| !l.is_empty())
            .collect();

        let mut children = if lines.is_empty() {
            vec![]
        } else {
            level_children(&lines, nesting)?
        };
        children.push(inner.take());
        if children.iter().all(Option::is_none) {
            continue;
        }
        inner = Some(ParentNode::from_optional("blockquote", children)?.into());
    }

    inner.ok_or_else(|| {
        HtmlError::NoChildren {
            tag: "blockquote".to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn html(block: &str) -> String {
        translate_quote(block, Nesting::new(32)).unwrap().to_html()
    }

    #[test]
    fn single_line_quote() {
        assert_eq!(html("> This is a quote"), "<blockquote>This is a quote</blockquote>");
    }

    #[test]
    fn multi_line_quote_joins_lines() {
        assert_eq!(
            html("> Line one\n> Line **two**\n> Line three"),
            "<blockquote>Line one Line <b>two</b> Line three</blockquote>"
        );
    }

    #[test]
    fn nested_quote() {
        assert_snapshot!(
            html("> outer\n> > inner"),
            @"<blockquote>outer<blockquote>inner</blockquote></blockquote>"
        );
    }

    #[test]
    fn skipped_level_still_wraps() {
        assert_eq!(
            html("> top\n> > > deep"),
            "<blockquote>top<blockquote><blockquote>deep</blockquote></blockquote></blockquote>"
        );
    }

    #[test]
    fn empty_level_keeps_deeper_content() {
        assert_eq!(
            html(">\n> > inner"),
            "<blockquote><blockquote>inner</blockquote></blockquote>"
        );
    }

    #[test]
    fn returning_to_outer_level() {
        assert_eq!(
            html("> a\n> > b\n> c"),
            "<blockquote>a c<blockquote>b</blockquote></blockquote>"
        );
    }

    #[test]
    fn quoted_unordered_list() {
        assert_eq!(
            html("> - one\n> - two"),
            "<blockquote><ul><li>one</li><li>two</li></ul></blockquote>"
        );
    }

    #[test]
    fn quoted_ordered_list() {
        assert_eq!(
            html("> 1. one\n> 2. two"),
            "<blockquote><ol><li>one</li><li>two</li></ol></blockquote>"
        );
    }

    #[test]
    fn depth_over_limit() {
        assert_eq!(
            translate_quote("> > > x", Nesting::new(2)),
            Err(ConvertError::NestingTooDeep { limit: 2 })
        );
    }
}
