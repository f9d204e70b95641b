/// The formatting carried by a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a URL target.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// A contiguous run of inline text with one formatting kind.
///
/// `target` is set for links and images only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl TextSpan {
    /// A span without a target. For `Link`/`Image` use [`TextSpan::with_target`].
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn with_target(
        content: impl Into<String>,
        kind: SpanKind,
        target: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            kind,
            target: kind.has_target().then(|| target.into()),
        }
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_target(text, SpanKind::Link, target)
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self::with_target(alt, SpanKind::Image, target)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_dropped_for_non_link_kinds() {
        let span = TextSpan::with_target("x", SpanKind::Bold, "https://example.com");
        assert_eq!(span.target(), None);
    }

    #[test]
    fn link_keeps_target() {
        let span = TextSpan::link("docs", "https://docs.rs");
        assert_eq!(span.kind(), SpanKind::Link);
        assert_eq!(span.content(), "docs");
        assert_eq!(span.target(), Some("https://docs.rs"));
    }
}
