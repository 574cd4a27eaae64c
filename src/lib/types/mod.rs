//! Shared data types for TOC extraction.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

/// Heading level, always within 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub fn new(n: u8) -> Option<Self> {
        (1..=6).contains(&n).then_some(Self(n))
    }

    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<u8>().ok().and_then(Self::new)
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One navigable heading found in rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingRecord {
    pub level: Level,
    /// Link target as written in the anchor's href, still URL-encoded.
    pub fragment: String,
    /// Display text, possibly containing residual markup.
    pub text: String,
}

/// Logical content of a single outline line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    pub indent_level: usize,
    pub text: String,
    pub link: String,
}

impl OutlineEntry {
    /// Render as a markdown list item, repeating `indent` once per level.
    pub fn render(&self, indent: &str) -> String {
        format!(
            "{}* [{}]({})",
            indent.repeat(self.indent_level),
            self.text,
            self.link
        )
    }
}

/// Rendered table of contents, one line per surviving heading in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outline(Vec<String>);

impl Outline {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn push(&mut self, line: String) {
        self.0.push(line);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests;
