use std::{borrow::Cow, sync::LazyLock};

use html_escape::decode_html_entities;
use regex::Regex;

#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

/// Characters with meaning inside a markdown list item link.
const SPEC_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '.', '!',
];

/// Drop the line breaks and tabs renderers leave inside captured markup.
pub fn strip_control(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Reduce rendered heading content to plain text: tags removed, renderer
/// line breaks and tabs dropped, entities decoded.
pub fn clean_text(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    let collapsed = strip_control(&stripped);
    decode_html_entities(&collapsed).trim().to_string()
}

/// Backslash-escape every markdown-significant character in `s`.
pub fn escape_spec_chars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if SPEC_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Percent-decode a link fragment. Undecodable input is returned unchanged.
pub fn decode_fragment(fragment: &str) -> Cow<'_, str> {
    match urlencoding::decode(fragment) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::debug!("keeping undecodable fragment {fragment:?}: {e}");
            Cow::Borrowed(fragment)
        }
    }
}

/// Compute a GitHub-style anchor slug: lowercase, alphanumerics, `-` and
/// `_` kept, spaces turned into `-`, everything else dropped. Text with
/// nothing usable gives an empty slug, as on GitHub.
pub fn slugify(input: &str) -> String {
    let mut out = String::new();

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            for lc in ch.to_lowercase() {
                out.push(lc);
            }
        } else if ch.is_whitespace() {
            out.push('-');
        }
    }

    out
}
