use std::sync::LazyLock;

use regex::Regex;

use super::kinds::CodeFence;

static HORIZONTAL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]{2,}").unwrap());

/// Splits a document into blocks on blank lines.
///
/// Splitting happens first; only then is a block whose first line is a code
/// fence treated as opaque. Code blocks are dedented; every other block has
/// its lines trimmed, runs of horizontal whitespace collapsed to one space
/// and tabs removed.
///
/// `segment(&segment(doc).join("\n\n")) == segment(doc)` for any input.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut blocks);

    log::debug!("segmented document into {} blocks", blocks.len());
    blocks
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    let Some(first) = current.first() else {
        return;
    };
    let block = if CodeFence::is_fence(first) {
        normalize_code(current)
    } else {
        normalize_text(current)
    };
    current.clear();
    if !block.is_empty() {
        blocks.push(block);
    }
}

/// Trims the fence lines and removes the common indentation of the lines between them.
fn normalize_code(lines: &[&str]) -> String {
    let closing = lines.len() > 1 && lines.last().is_some_and(|l| CodeFence::is_fence(l));
    let interior_end = if closing { lines.len() - 1 } else { lines.len() };
    let interior = &lines[1..interior_end];

    let indent = interior
        .iter()
        .map(|l| leading_whitespace(l))
        .min()
        .unwrap_or(0);

    let mut out = Vec::with_capacity(lines.len());
    out.push(lines[0].trim());
    out.extend(interior.iter().map(|l| strip_indent(l, indent)));
    if closing {
        out.push(lines[interior_end].trim());
    }
    out.join("\n").trim_end().to_string()
}

fn normalize_text(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| HORIZONTAL_RUN.replace_all(line.trim(), " ").replace('\t', ""))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drops `n` leading whitespace characters.
fn strip_indent(line: &str, n: usize) -> &str {
    match line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .nth(n)
    {
        Some((idx, _)) => &line[idx..],
        None => line.trim_start(),
    }
}
