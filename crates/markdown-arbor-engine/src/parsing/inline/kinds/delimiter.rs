use crate::parsing::inline::types::SpanKind;

/// Paired inline delimiters.
///
/// The pass order matters: `**` runs before `_`, which runs before `` ` ``.
pub struct Delimiter;

impl Delimiter {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
    pub const CODE: &'static str = "`";

    pub const PASSES: [(&'static str, SpanKind); 3] = [
        (Self::BOLD, SpanKind::Bold),
        (Self::ITALIC, SpanKind::Italic),
        (Self::CODE, SpanKind::Code),
    ];

    /// Code keeps whitespace-only content verbatim; other kinds blank it out.
    pub fn keeps_blank_content(kind: SpanKind) -> bool {
        kind == SpanKind::Code
    }
}
