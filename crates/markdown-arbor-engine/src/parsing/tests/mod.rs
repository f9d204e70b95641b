//! Whole-pipeline tests for the parsing module.
//!
//! Every converted document is run through the tree invariants before its
//! HTML is compared.

mod invariants;

use markdown_arbor_config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{assemble, blocks::segment};

fn convert(md: &str) -> String {
    let root = assemble(md, &Config::default()).unwrap();
    invariants::check(&root);
    root.to_html()
}

#[rstest]
#[case::empty("", "<div><p></p></div>")]
#[case::heading("# Hello\n\nWorld **bold**", "<div><h1>Hello</h1><p>World <b>bold</b></p></div>")]
#[case::nested_quote(
    "> outer\n> > inner",
    "<div><blockquote>outer<blockquote>inner</blockquote></blockquote></div>"
)]
#[case::ordered("1. a\n2. b", "<div><ol><li>a</li><li>b</li></ol></div>")]
#[case::ordered_out_of_sequence("1. a\n3. b", "<div><p>1. a 3. b</p></div>")]
#[case::unordered("- x\n* y", "<div><ul><li>x</li><li>y</li></ul></div>")]
#[case::image(
    "![alt text](https://example.com/x.png)",
    r#"<div><p><img src="https://example.com/x.png" alt="alt text" /></p></div>"#
)]
#[case::link(
    "Go [home](/index.html) now.",
    r#"<div><p>Go <a href="/index.html">home</a> now.</p></div>"#
)]
fn converts(#[case] md: &str, #[case] expected: &str) {
    assert_eq!(convert(md), expected);
}

#[test]
fn fence_contents_are_literal() {
    let md = "```\n# not a heading\n> not a quote\n- not a list\n```";
    assert_eq!(
        convert(md),
        "<div><pre><code># not a heading\n> not a quote\n- not a list\n</code></pre></div>"
    );
}

#[test]
fn blank_line_splits_a_fence() {
    assert_eq!(
        segment("```\na\n\nb\n```"),
        vec!["```\na".to_string(), "b\n```".to_string()]
    );
    let err = assemble("```\na\n\nb\n```", &Config::default()).unwrap_err();
    assert!(matches!(err, crate::error::ConvertError::Syntax { .. }));
}

#[test]
fn unclosed_fence_reads_as_unterminated_code() {
    let err = assemble("```\nstill open", &Config::default()).unwrap_err();
    assert!(matches!(err, crate::error::ConvertError::Syntax { .. }));
}

#[test]
fn conversion_is_deterministic() {
    let md = "# T\n\n> a\n> > b\n\n- x\n\n```\ncode\n```\n\ntext _i_";
    assert_eq!(convert(md), convert(md));
}

#[test]
fn segmented_blocks_convert_the_same() {
    let md = "#   Title\n\n  para   one\n\twith tab\n\n1. one\n2. two";
    let rejoined = segment(md).join("\n\n");
    assert_eq!(convert(md), convert(&rejoined));
}

#[test]
fn attribute_quotes_are_escaped() {
    assert_eq!(
        convert(r#"[q](/a"b)"#),
        r#"<div><p><a href="/a&quot;b">q</a></p></div>"#
    );
}
