use thiserror::Error;

use crate::html::HtmlError;
use crate::parsing::blocks::BlockType;
use crate::parsing::inline::SpanKind;

/// Any failure that aborts a conversion. There is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid Markdown syntax: unterminated `{delimiter}` in {text:?}")]
    Syntax { delimiter: String, text: String },

    #[error("Unsupported block type: {0:?}")]
    UnsupportedBlockType(BlockType),

    #[error("{kind:?} span {text:?} requires a non-empty target")]
    MissingTarget { kind: SpanKind, text: String },

    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Invalid conversion config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Html(#[from] HtmlError),
}
