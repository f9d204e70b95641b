//! # HTML Node Model
//!
//! A minimal HTML tree: leaves carry text (or nothing, for self-closing tags)
//! and parents carry an ordered, non-empty list of children.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode`, `LeafNode`, `ParentNode` and their serialization
//! - **`tags`**: the self-closing tag set
//!
//! ## Key Invariants
//!
//! - A parent always has a tag and at least one child
//! - A leaf has a value unless its tag is self-closing
//! - Only attribute values are escaped (`"` → `&quot;`); text is emitted raw

pub mod node;
pub mod tags;

pub use node::{Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
pub use tags::{SELF_CLOSING_TAGS, is_self_closing};
