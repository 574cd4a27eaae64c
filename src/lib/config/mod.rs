pub const DEFAULT_INDENT: usize = 2;
pub const DEFAULT_MIN_LEVEL: usize = 6;

pub const TOC_HEADER: &str = "Table of Contents\n=================\n";
pub const TOC_FOOTER: &str = "<!-- Created by ghtoc -->";

// GitHub markdown rendering endpoint and the env var holding its token.
pub const GITHUB_MARKDOWN_API: &str = "https://api.github.com/markdown/raw";
pub const GITHUB_TOKEN_ENV: &str = "GH_TOC_TOKEN";

/// Settings read by the outline builder for a single document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Headings at or above this level are excluded.
    pub start_depth: usize,
    /// Headings below this level are excluded; 0 means unbounded.
    pub max_depth: usize,
    /// Prepended to every link when set.
    pub absolute_prefix: Option<String>,
    pub escape: bool,
    /// One level of indentation.
    pub indent: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            start_depth: 0,
            max_depth: 0,
            absolute_prefix: None,
            escape: true,
            indent: " ".repeat(DEFAULT_INDENT),
        }
    }
}

/// Per-invocation options as supplied on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocOptions {
    pub absolute_paths: bool,
    pub start_depth: usize,
    pub depth: usize,
    pub escape: bool,
    /// Indentation width in spaces.
    pub indent: usize,
    pub debug: bool,
}

impl Default for DocOptions {
    fn default() -> Self {
        Self {
            absolute_paths: false,
            start_depth: 0,
            depth: 0,
            escape: true,
            indent: DEFAULT_INDENT,
            debug: false,
        }
    }
}

impl DocOptions {
    /// Outline settings for a document living at `path`.
    pub fn outline_config(&self, path: &str) -> OutlineConfig {
        OutlineConfig {
            start_depth: self.start_depth,
            max_depth: self.depth,
            absolute_prefix: self.absolute_paths.then(|| path.to_string()),
            escape: self.escape,
            indent: " ".repeat(self.indent),
        }
    }
}
