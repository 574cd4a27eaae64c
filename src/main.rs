use clap::Parser;
use color_eyre::eyre::eyre;
use itertools::{Either, Itertools};
use libghtoc::{
    config::{DEFAULT_INDENT, DocOptions, GITHUB_TOKEN_ENV},
    pipeline::{Document, collect_tocs, render_report},
    render::{GithubRenderer, MarkdownRenderer, Renderer},
    source::Source,
    types::Outline,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Generate a table of contents for markdown documents.
#[derive(Parser, Debug)]
#[command(name = "ghtoc", version)]
struct Cli {
    /// Local paths or URLs. Markdown is read from stdin when none is given.
    paths: Vec<String>,

    /// Process documents one after another instead of in parallel.
    #[arg(long)]
    serial: bool,

    #[arg(long)]
    hide_header: bool,

    #[arg(long)]
    hide_footer: bool,

    /// Skip headings at or above this level.
    #[arg(long, default_value_t = 0)]
    start_depth: usize,

    /// Skip headings below this level (0 keeps all).
    #[arg(long, default_value_t = 0)]
    depth: usize,

    /// Do not escape markdown characters in heading text.
    #[arg(long)]
    no_escape: bool,

    /// Spaces per nesting level.
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Render through the GitHub markdown API instead of locally.
    #[arg(long)]
    github: bool,

    /// GitHub token for the markdown API.
    #[arg(long, env = GITHUB_TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Log each step to stderr and keep a copy of the rendered HTML.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn doc_options(&self) -> DocOptions {
        DocOptions {
            // Entries from several files must say which file they point into.
            absolute_paths: self.paths.len() > 1,
            start_depth: self.start_depth,
            depth: self.depth,
            escape: !self.no_escape,
            indent: self.indent,
            debug: self.debug,
        }
    }

    fn documents(&self) -> Vec<Document> {
        let options = self.doc_options();
        if self.paths.is_empty() {
            return vec![Document::new(Source::Stdin, options)];
        }
        self.paths
            .iter()
            .map(|p| Document::new(Source::parse(p), options.clone()))
            .collect()
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let renderer: Box<dyn Renderer> = if cli.github {
        Box::new(GithubRenderer::new(cli.token.clone())?)
    } else {
        Box::new(MarkdownRenderer::default())
    };

    let docs = cli.documents();
    let (outlines, errors): (Vec<Outline>, Vec<color_eyre::Report>) =
        collect_tocs(&docs, renderer.as_ref(), cli.serial)
            .into_iter()
            .partition_map(|r| match r {
                Ok(v) => Either::Left(v),
                Err(e) => Either::Right(e),
            });

    print!(
        "{}",
        render_report(&outlines, docs.len(), cli.hide_header, cli.hide_footer)
    );

    if !errors.is_empty() {
        return Err(eyre!("Failed to build some tables of contents: {errors:?}"));
    }

    Ok(())
}

fn init_logging(debug: bool) -> color_eyre::Result<()> {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
