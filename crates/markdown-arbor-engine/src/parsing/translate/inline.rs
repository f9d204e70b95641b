use crate::error::ConvertError;
use crate::html::{HtmlNode, LeafNode, ParentNode};
use crate::parsing::inline::{SpanKind, TextSpan, tokenize};

use super::Nesting;

/// Tokenizes `text` and renders every span, recursing into bold and italic content.
///
/// Empty text renders as a single empty text node so the caller's parent
/// element always has a child.
pub fn inline_nodes(text: &str, nesting: Nesting) -> Result<Vec<HtmlNode>, ConvertError> {
    if text.is_empty() {
        return Ok(vec![LeafNode::text("").into()]);
    }
    tokenize(text)?
        .iter()
        .map(|span| span_to_node(span, nesting))
        .collect()
}

/// Renders a single span.
///
/// Code is literal. Link text and image alt text are literal as well; only
/// emphasis content is tokenized again, one nesting level deeper.
pub fn span_to_node(span: &TextSpan, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let node = match span.kind() {
        SpanKind::Plain => LeafNode::text(span.content()).into(),
        SpanKind::Bold => emphasis("b", span.content(), nesting)?,
        SpanKind::Italic => emphasis("i", span.content(), nesting)?,
        SpanKind::Code => LeafNode::element("code", span.content()).into(),
        SpanKind::Link => LeafNode::element("a", span.content())
            .with_attr("href", target(span)?)
            .into(),
        SpanKind::Image => LeafNode::element("img", "")
            .with_attr("src", target(span)?)
            .with_attr("alt", span.content())
            .into(),
    };
    Ok(node)
}

fn emphasis(tag: &str, content: &str, nesting: Nesting) -> Result<HtmlNode, ConvertError> {
    let children = inline_nodes(content, nesting.descend()?)?;
    Ok(ParentNode::new(tag, children)?.into())
}

fn target(span: &TextSpan) -> Result<&str, ConvertError> {
    span.target()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ConvertError::MissingTarget {
            kind: span.kind(),
            text: span.content().to_string(),
        })
}
