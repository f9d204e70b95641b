use std::fmt;

use thiserror::Error;

use super::tags::is_self_closing;

/// Ordered `name="value"` pairs. Insertion order is serialization order.
pub type Attributes = Vec<(String, String)>;

/// Structural violations raised while building nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
    #[error("a parent node requires a tag")]
    MissingTag,
    #[error("<{tag}> requires at least one child")]
    NoChildren { tag: String },
    #[error("<{tag}> requires a value")]
    MissingValue { tag: String },
}

/// A node with no children: raw text, a text-bearing element, or a void element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
    attrs: Attributes,
}

impl LeafNode {
    /// Builds a leaf. A value is mandatory unless `tag` is self-closing.
    pub fn new(tag: Option<&str>, value: Option<String>) -> Result<Self, HtmlError> {
        if value.is_none() && !tag.is_some_and(is_self_closing) {
            return Err(HtmlError::MissingValue {
                tag: tag.unwrap_or("text").to_string(),
            });
        }
        Ok(Self {
            tag: tag.map(str::to_string),
            value,
            attrs: Attributes::new(),
        })
    }

    /// Untagged text, emitted verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A tagged element wrapping literal text, e.g. `<code>x</code>`.
    pub fn element(tag: &str, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

/// An element with an ordered, non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attrs: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self, HtmlError> {
        if tag.is_empty() {
            return Err(HtmlError::MissingTag);
        }
        if children.is_empty() {
            return Err(HtmlError::NoChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attrs: Attributes::new(),
        })
    }

    /// Like [`ParentNode::new`], dropping `None` children first.
    pub fn from_optional(tag: &str, children: Vec<Option<HtmlNode>>) -> Result<Self, HtmlError> {
        Self::new(tag, children.into_iter().flatten().collect())
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Children of a parent; always empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn write_attrs(f: &mut fmt::Formatter<'_>, attrs: &Attributes) -> fmt::Result {
    for (name, value) in attrs {
        write!(f, " {name}=\"{}\"", value.replace('"', "&quot;"))?;
    }
    Ok(())
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or_default();
        let Some(tag) = self.tag.as_deref() else {
            return f.write_str(value);
        };
        write!(f, "<{tag}")?;
        write_attrs(f, &self.attrs)?;
        if is_self_closing(tag) {
            return f.write_str(" />");
        }
        write!(f, ">{value}</{tag}>")
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        write_attrs(f, &self.attrs)?;
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}
