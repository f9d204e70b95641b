//! # Parsing
//!
//! Markdown text in, HTML node tree out.
//!
//! ## Pipeline
//!
//! 1. **`blocks`**: segment the document on blank lines and classify each block
//! 2. **`translate`**: turn each block into a subtree, tokenizing inline text
//!    through **`inline`**
//! 3. **`assemble`**: collect the subtrees under one `div`, splitting stacked
//!    headings and merging paragraph fragments
//!
//! Every stage is a pure function of its input; the first error aborts the
//! whole conversion.

pub mod assemble;
pub mod blocks;
pub mod inline;
pub mod translate;

#[cfg(test)]
mod tests;

pub use assemble::{assemble, should_merge};
pub use translate::{Nesting, translate};
