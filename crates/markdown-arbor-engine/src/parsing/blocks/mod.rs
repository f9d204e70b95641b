//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split into blocks on blank
//!    lines; blocks opening with a code fence are dedented, not collapsed
//!
//! 2. **Classification** (`classify`): each block gets a `BlockType` by
//!    first-match-wins pattern rules
//!
//! ## Modules
//!
//! - **`types`**: `BlockType`
//! - **`kinds`**: block syntax helpers with owned delimiters (BlockQuote, CodeFence, Heading, ListMarker, Paragraph)
//! - **`segment`**: `segment()` with whitespace normalization
//! - **`classify`**: `classify()`
//!
//! ## Key Invariants
//!
//! - Blank lines always end a block, even inside a fence
//! - Closed code blocks get no block/inline parsing inside
//! - Classification is a pure function of the block text

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use segment::segment;
pub use types::BlockType;
