//! # Inline Kinds
//!
//! Types that own inline syntax delimiters. The tokenizer refers to these
//! constants and never hardcodes `**`, `_`, `` ` ``, `[` or `](`.
//!
//! - **`Delimiter`**: paired emphasis/code delimiters and their pass order
//! - **`LinkMarker`**: link and image marker pieces

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::LinkMarker;
