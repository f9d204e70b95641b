use crate::error::ConvertError;
use crate::html::{HtmlNode, ParentNode};
use crate::parsing::blocks::kinds::ListMarker;

use super::{Nesting, inline_nodes};

/// Builds a `ul` or `ol` with one `li` per marker line.
///
/// Lines that carry no list marker are skipped. A block that yields no
/// items produces `Ok(None)`, never an empty list element.
pub fn translate_list(
    block: &str,
    ordered: bool,
    nesting: Nesting,
) -> Result<Option<HtmlNode>, ConvertError> {
    let mut items = vec![];
    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(content) = ListMarker::item_content(line, ordered) else {
            continue;
        };
        items.push(ParentNode::new("li", inline_nodes(content, nesting)?)?.into());
    }

    if items.is_empty() {
        log::debug!("list block produced no items, omitting it");
        return Ok(None);
    }
    let tag = if ordered { "ol" } else { "ul" };
    Ok(Some(ParentNode::new(tag, items)?.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(block: &str, ordered: bool) -> Option<String> {
        translate_list(block, ordered, Nesting::new(32))
            .unwrap()
            .map(|n| n.to_html())
    }

    #[test]
    fn unordered_items() {
        assert_eq!(
            html("- Item one\n- Item **two**\n* Item three", false).as_deref(),
            Some("<ul><li>Item one</li><li>Item <b>two</b></li><li>Item three</li></ul>")
        );
    }

    #[test]
    fn ordered_items() {
        assert_eq!(
            html("1. First\n2. Second\n3. Third", true).as_deref(),
            Some("<ol><li>First</li><li>Second</li><li>Third</li></ol>")
        );
    }

    #[test]
    fn empty_marker_gives_empty_item() {
        assert_eq!(html("-", false).as_deref(), Some("<ul><li></li></ul>"));
    }

    #[test]
    fn unmarked_lines_are_skipped() {
        assert_eq!(
            html("intro\n- kept", false).as_deref(),
            Some("<ul><li>kept</li></ul>")
        );
    }

    #[test]
    fn no_items_means_no_node() {
        assert_eq!(html("nothing here", false), None);
        assert_eq!(html("- wrong marker", true), None);
    }
}
