//! # markdown-arbor-engine
//!
//! Converts a small Markdown dialect into an HTML node tree rooted at a
//! single `div`.
//!
//! ```
//! let root = markdown_arbor_engine::markdown_to_html("# Hello\n\nWorld **bold**").unwrap();
//! assert_eq!(root.to_html(), "<div><h1>Hello</h1><p>World <b>bold</b></p></div>");
//! ```
//!
//! ## Modules
//!
//! - **`html`**: the node model and its serialization
//! - **`parsing`**: segmentation, classification, inline tokenizing, translation
//! - **`error`**: `ConvertError`

pub mod error;
pub mod html;
pub mod parsing;

pub use error::ConvertError;
pub use html::{HtmlError, HtmlNode, LeafNode, ParentNode};
pub use markdown_arbor_config::Config;
pub use parsing::blocks::BlockType;
pub use parsing::inline::{SpanKind, TextSpan};

/// Converts `document` with the default [`Config`].
pub fn markdown_to_html(document: &str) -> Result<HtmlNode, ConvertError> {
    markdown_to_html_with(document, &Config::default())
}

/// Converts `document` using the limits and switches in `config`.
///
/// # Errors
/// [`ConvertError::InvalidConfig`] if `config` fails [`Config::validate`],
/// otherwise the first [`ConvertError`] hit anywhere in the document; no
/// partial tree is returned.
pub fn markdown_to_html_with(document: &str, config: &Config) -> Result<HtmlNode, ConvertError> {
    log::debug!("converting document of {} bytes", document.len());
    parsing::assemble(document, config)
}
