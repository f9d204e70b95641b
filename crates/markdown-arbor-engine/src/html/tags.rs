/// Void elements, rendered as `<tag ... />` with no closing tag.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "img", "br", "hr", "input", "meta", "link", "base", "area", "col", "embed", "source", "track",
    "wbr",
];

pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}
