//! Output cleanup.
//!
//! Conditional template sections leave stray separators, blank lines and
//! duplicated lines or words behind. [`clean`] repairs them with a fixed
//! sequence of text passes.

use std::collections::HashSet;
use std::sync::LazyLock;

use addr_standards::Replacement;
use regex::Regex;

static REPEATED_COMMAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*,)+").expect("Invalid repeated comma regex"));

static SEPARATORS_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,|\s]*\n[\s|,]*").expect("Invalid newline separator regex"));

static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("Invalid newline whitespace regex"));

/// Clean rendered or joined address text.
///
/// The pass is repeated until the text stops changing, so
/// `clean(&clean(x)) == clean(x)`. Non-empty output ends with exactly one
/// newline.
pub fn clean(text: &str) -> String {
    let mut current = clean_pass(text);
    // A pass either shortens the text or leaves it unchanged.
    for _ in 0..current.len() {
        let next = clean_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Normalize raw template output before the first [`clean`]: squeeze newline
/// runs, drop leading whitespace, and trim whitespace around every newline.
pub fn tidy_rendered(text: &str) -> String {
    let squeezed = squeeze(text, '\n');
    SPACE_AROUND_NEWLINE
        .replace_all(squeezed.trim_start(), "\n")
        .into_owned()
}

/// Apply post-format substitutions to the whole text, in order.
pub fn postformat_replace(text: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |acc, replacement| replacement.apply(&acc))
}

fn clean_pass(text: &str) -> String {
    let text = squeeze(text, ' ');
    let text = dedupe_lines(&text);
    let text = REPEATED_COMMAS.replace_all(&text, ",");
    let text = SEPARATORS_AROUND_NEWLINE.replace_all(&text, "\n");
    let text = collapse_repeated_tokens(&text);
    strip_leading_separators(&text).to_string()
}

/// Collapse runs of `ch` into one.
fn squeeze(text: &str, ch: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if c == ch && previous == Some(ch) {
            continue;
        }
        out.push(c);
        previous = Some(c);
    }
    out
}

/// Drop repeated lines, keeping the first occurrence of each, and end the
/// text with a single newline.
fn dedupe_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let mut seen = HashSet::with_capacity(lines.len());
    lines.retain(|line| seen.insert(*line));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Collapse `word, word` (any whitespace after the comma) into `word`.
/// Only whole alphanumeric tokens match; runs collapse to one occurrence.
fn collapse_repeated_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(char::is_alphanumeric) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest
            .find(|c: char| !c.is_alphanumeric())
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        out.push_str(token);
        rest = tail;
        while let Some(after) = strip_repeat(rest, token) {
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn strip_repeat<'a>(rest: &'a str, token: &str) -> Option<&'a str> {
    let after_comma = rest.strip_prefix(',')?;
    let after_space = after_comma.trim_start();
    if after_space.len() == after_comma.len() {
        return None;
    }
    let after = after_space.strip_prefix(token)?;
    if after.starts_with(char::is_alphanumeric) {
        return None;
    }
    Some(after)
}

fn strip_leading_separators(text: &str) -> &str {
    text.trim_start_matches(|c: char| matches!(c, ',' | '|' | '-') || c.is_whitespace())
}
