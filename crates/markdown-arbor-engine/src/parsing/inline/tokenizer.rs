use std::ops::Range;

use crate::error::ConvertError;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, LinkMarker},
    types::{SpanKind, TextSpan},
};

/// Tokenizes inline text into an ordered sequence of [`TextSpan`]s.
///
/// Images are extracted first, then links, then the `**`, `_` and `` ` ``
/// delimiter passes run in that order. Each pass only looks at spans that
/// are still plain, so code inside a link label or a `_` inside an image
/// target is never split.
///
/// Empty input yields a single empty plain span.
///
/// # Errors
/// [`ConvertError::Syntax`] for an opened delimiter that is never closed,
/// [`ConvertError::MissingTarget`] for `[text]()` or `![alt]()`.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let mut spans = split_images(vec![TextSpan::plain(text)])?;
    spans = split_links(spans)?;
    for (delimiter, kind) in Delimiter::PASSES {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    Ok(spans)
}

/// Splits every plain span on `delimiter` pairs, tagging the enclosed text `kind`.
///
/// Multiple non-overlapping pairs in one span are all converted. Non-plain
/// spans pass through untouched.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    if delimiter.is_empty() {
        return Ok(spans);
    }
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        split_plain(span.content(), delimiter, kind, &mut out)?;
    }
    Ok(out)
}

fn split_plain(
    text: &str,
    delimiter: &str,
    kind: SpanKind,
    out: &mut Vec<TextSpan>,
) -> Result<(), ConvertError> {
    let mut rest = text;
    loop {
        let Some(open) = rest.find(delimiter) else {
            out.push(TextSpan::plain(rest));
            return Ok(());
        };
        let inner_start = open + delimiter.len();
        let Some(close) = rest[inner_start..].find(delimiter).map(|i| i + inner_start) else {
            return Err(ConvertError::Syntax {
                delimiter: delimiter.to_string(),
                text: text.to_string(),
            });
        };

        if open > 0 {
            out.push(TextSpan::plain(&rest[..open]));
        }
        let inner = &rest[inner_start..close];
        if !Delimiter::keeps_blank_content(kind) && inner.trim().is_empty() {
            out.push(TextSpan::new("", kind));
        } else {
            out.push(TextSpan::new(inner, kind));
        }

        rest = &rest[close + delimiter.len()..];
        if rest.is_empty() {
            return Ok(());
        }
    }
}

pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ConvertError> {
    split_markers(spans, SpanKind::Image)
}

pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ConvertError> {
    split_markers(spans, SpanKind::Link)
}

/// Returns `(alt, target)` for every image marker in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(text, SpanKind::Image)
}

/// Returns `(text, target)` for every link marker in `text`, images excluded.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(text, SpanKind::Link)
}

fn extract(text: &str, kind: SpanKind) -> Vec<(String, String)> {
    scan_markers(text, kind)
        .into_iter()
        .map(|m| (text[m.text].to_string(), text[m.target].to_string()))
        .collect()
}

/// Byte ranges of one `[text](target)` or `![alt](target)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    full: Range<usize>,
    text: Range<usize>,
    target: Range<usize>,
}

fn split_markers(spans: Vec<TextSpan>, kind: SpanKind) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let s = span.content();
        let markers = scan_markers(s, kind);
        if markers.is_empty() {
            out.push(span);
            continue;
        }

        let mut last = 0;
        for m in markers {
            if m.full.start > last {
                out.push(TextSpan::plain(&s[last..m.full.start]));
            }
            let label = &s[m.text];
            let target = &s[m.target];
            if target.is_empty() {
                return Err(ConvertError::MissingTarget {
                    kind,
                    text: label.to_string(),
                });
            }
            out.push(TextSpan::with_target(label, kind, target));
            last = m.full.end;
        }
        if last < s.len() {
            out.push(TextSpan::plain(&s[last..]));
        }
    }
    Ok(out)
}

fn scan_markers(s: &str, kind: SpanKind) -> Vec<Marker> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(m) = try_parse_marker(&mut cur, kind) {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse a link (or image) marker at the cursor.
///
/// The label must close on the same line; the target runs to the `)` that
/// balances the opening `(`. On failure the cursor is restored.
fn try_parse_marker(cur: &mut Cursor<'_>, kind: SpanKind) -> Option<Marker> {
    let open = match kind {
        SpanKind::Image => LinkMarker::IMAGE_OPEN,
        _ => LinkMarker::LINK_OPEN,
    };
    if !cur.starts_with(open) {
        return None;
    }
    if kind == SpanKind::Link && cur.prev() == Some(LinkMarker::IMAGE_BANG) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());
    let text_start = cur.pos();

    let Some(rel) = cur.find(LinkMarker::TEXT_END) else {
        *cur = saved;
        return None;
    };
    let text_end = text_start + rel;
    if cur.s[text_start..text_end].contains('\n') {
        *cur = saved;
        return None;
    }
    cur.bump_n(rel + LinkMarker::TEXT_END.len());
    let target_start = cur.pos();

    let Some(target_end) = cur.skip_balanced_parens() else {
        *cur = saved;
        return None;
    };

    Some(Marker {
        full: start..cur.pos(),
        text: text_start..text_end,
        target: target_start..target_end,
    })
}
