//! Heading extraction from rendered markup.
//!
//! Only headings carrying the navigable anchor idiom produced by GitHub-style
//! renderers are recognised:
//!
//! ```html
//! <h2><a id="user-content-intro" class="anchor" href="#intro"></a>Intro</h2>
//! ```
//!
//! Anything else is invisible to the table of contents.

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::types::{HeadingRecord, Level};

#[allow(clippy::expect_used)]
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?si)<h(?P<num>[1-6])>\s*"#,
        r#"<a\s*id="user-content-[^"]*"\s*class="anchor"\s*"#,
        r#"href="(?P<href>[^"]*)"[^>]*>\s*"#,
        r#".*?</a>(?P<name>.*?)</h"#,
    ))
    .expect("heading pattern is valid")
});

/// Lazy iterator over the navigable headings of a rendered document.
pub struct Headings<'h> {
    inner: CaptureMatches<'static, 'h>,
}

impl Iterator for Headings<'_> {
    type Item = HeadingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.inner.by_ref() {
            let num = caps.name("num").map_or("", |m| m.as_str());
            let Some(level) = Level::parse(num) else {
                tracing::debug!("skipping heading with unparsable level {num:?}");
                continue;
            };

            let record = HeadingRecord {
                level,
                fragment: caps
                    .name("href")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                text: caps
                    .name("name")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            };
            tracing::trace!(
                heading_level = %record.level,
                fragment = %record.fragment,
                "matched heading"
            );
            return Some(record);
        }
        None
    }
}

/// Scan `html` for heading anchors, yielding records in document order.
pub fn extract_headings(html: &str) -> Headings<'_> {
    tracing::debug!(html_len = html.len(), "extracting headings");
    Headings {
        inner: HEADING_RE.captures_iter(html),
    }
}
