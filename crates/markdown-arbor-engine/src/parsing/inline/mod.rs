//! # Inline Tokenizing
//!
//! Turns a flat run of text into typed spans (plain, bold, italic, code,
//! link, image).
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: delimiter and marker constants (`Delimiter`, `LinkMarker`)
//! - **`cursor`**: `Cursor` for byte scanning with balanced-paren support
//! - **`tokenizer`**: `tokenize()` and the individual split passes
//!
//! ## Pass Precedence
//!
//! Images, then links, then `**`, `_`, `` ` ``. A later pass only sees text
//! left plain by the earlier ones, so `![x](y)` is never also a link.

pub mod cursor;
pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::{
    extract_images, extract_links, split_delimiter, split_images, split_links, tokenize,
};
pub use types::{SpanKind, TextSpan};
