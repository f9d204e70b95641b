/// Link and image markers: `[text](target)` and `![alt](target)`.
pub struct LinkMarker;

impl LinkMarker {
    pub const LINK_OPEN: &'static str = "[";
    pub const IMAGE_OPEN: &'static str = "![";
    /// Separates the bracketed text from the parenthesised target.
    pub const TEXT_END: &'static str = "](";
    /// A `[` right after this byte belongs to an image, not a link.
    pub const IMAGE_BANG: u8 = b'!';
}
