use crate::html::HtmlNode;

/// Validates the shape of a converted document.
///
/// Asserts that:
/// - The root is a `div` with at least one child
/// - Every parent node has a tag and at least one child
/// - Heading tags stay within `h1`..`h6`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &HtmlNode) {
    assert_eq!(root.tag(), Some("div"), "root must be a div: {root}");
    assert!(!root.children().is_empty(), "root has no children");
    walk(root);
}

fn walk(node: &HtmlNode) {
    let HtmlNode::Parent(parent) = node else {
        return;
    };
    assert!(!parent.tag().is_empty(), "parent without tag: {node}");
    assert!(
        !parent.children().is_empty(),
        "parent <{}> has no children",
        parent.tag()
    );
    if let Some(level) = parent.tag().strip_prefix('h').and_then(|l| l.parse::<u8>().ok()) {
        assert!((1..=6).contains(&level), "heading level out of range: {node}");
    }
    for child in parent.children() {
        walk(child);
    }
}
