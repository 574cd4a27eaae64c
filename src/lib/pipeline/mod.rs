use std::{env, fmt::Write as _, fs, path::PathBuf};

use color_eyre::Section;
use rayon::prelude::*;

use crate::{
    config::{DocOptions, OutlineConfig, TOC_FOOTER, TOC_HEADER},
    extract::extract_headings,
    outline::build_outline,
    render::Renderer,
    source::{Content, Source},
    types::Outline,
};

/// A document whose table of contents is wanted.
#[derive(Clone, Debug)]
pub struct Document {
    source: Source,
    options: DocOptions,
}

impl Document {
    pub fn new(source: Source, options: DocOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn outline_config(&self) -> OutlineConfig {
        self.options.outline_config(&self.source.to_string())
    }

    /// Build the outline from HTML already rendered.
    pub fn grab_toc(&self, html: &str) -> Outline {
        build_outline(extract_headings(html), &self.outline_config())
    }

    /// Load, render and outline the document.
    pub fn toc(&self, renderer: &dyn Renderer) -> color_eyre::Result<Outline> {
        Pipeline::new(self, renderer).load()?.render()?.outline()
    }

    /// Where the rendered HTML is dumped in debug mode: beside a local file,
    /// or in the temp dir under the URL's last path segment.
    fn debug_html_path(&self) -> Option<PathBuf> {
        if !self.options.debug {
            return None;
        }
        match &self.source {
            Source::Local(path) => {
                let mut name = path.clone().into_os_string();
                name.push(".debug.html");
                Some(PathBuf::from(name))
            }
            Source::Remote(url) => {
                let stem = url
                    .path_segments()
                    .and_then(|mut segments| segments.next_back())
                    .filter(|s| !s.is_empty())
                    .unwrap_or("remote");
                Some(env::temp_dir().join(format!("ghtoc-{stem}.debug.html")))
            }
            Source::Stdin => None,
        }
    }
}

/// One outline per document, in input order. Documents are processed in
/// parallel unless `serial` is set.
pub fn collect_tocs(
    docs: &[Document],
    renderer: &dyn Renderer,
    serial: bool,
) -> Vec<color_eyre::Result<Outline>> {
    if serial {
        docs.iter().map(|doc| doc.toc(renderer)).collect()
    } else {
        docs.par_iter().map(|doc| doc.toc(renderer)).collect()
    }
}

/// Final program output. The header only accompanies a single document's
/// outline; the footer closes any output.
pub fn render_report(
    outlines: &[Outline],
    documents: usize,
    hide_header: bool,
    hide_footer: bool,
) -> String {
    let mut out = String::new();
    if !hide_header && documents <= 1 {
        let _ = write!(out, "\n{TOC_HEADER}\n");
    }
    for outline in outlines {
        let _ = write!(out, "{outline}");
    }
    if !hide_footer {
        let _ = writeln!(out, "{TOC_FOOTER}");
    }
    out
}

trait PipelineStage {}
/// Pipeline typestate driver
struct Pipeline<'d, S: PipelineStage> {
    doc: &'d Document,
    renderer: &'d dyn Renderer,
    state: S,
}

struct Loaded(Content);
impl PipelineStage for Loaded {}
struct Rendered(String);
impl PipelineStage for Rendered {}
impl PipelineStage for () {}

// initial state
impl<'d> Pipeline<'d, ()> {
    fn new(doc: &'d Document, renderer: &'d dyn Renderer) -> Self {
        Self {
            doc,
            renderer,
            state: (),
        }
    }

    fn load(self) -> color_eyre::Result<Pipeline<'d, Loaded>> {
        tracing::debug!(source = %self.doc.source, "loading document");
        let content = self
            .doc
            .source
            .load()
            .with_note(|| format!("While loading {}", self.doc.source))?;
        Ok(Pipeline {
            doc: self.doc,
            renderer: self.renderer,
            state: Loaded(content),
        })
    }
}

impl<'d> Pipeline<'d, Loaded> {
    fn render(self) -> color_eyre::Result<Pipeline<'d, Rendered>> {
        let html = match self.state.0 {
            Content::Html(html) => html,
            Content::Markdown(markdown) => {
                let html = self
                    .renderer
                    .render(&markdown)
                    .with_note(|| format!("While rendering {}", self.doc.source))?;
                if let Some(path) = self.doc.debug_html_path() {
                    tracing::debug!(path = %path.display(), "writing rendered html");
                    fs::write(&path, &html)?;
                }
                html
            }
        };

        Ok(Pipeline {
            doc: self.doc,
            renderer: self.renderer,
            state: Rendered(html),
        })
    }
}

impl Pipeline<'_, Rendered> {
    fn outline(self) -> color_eyre::Result<Outline> {
        let outline = self.doc.grab_toc(&self.state.0);
        tracing::debug!(entries = outline.len(), "outline ready");
        Ok(outline)
    }
}
