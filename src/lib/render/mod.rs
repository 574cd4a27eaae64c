//! Markdown to HTML rendering. Whatever the backend, the output must carry
//! the heading anchor idiom the extractor looks for.

use std::time::Duration;

use color_eyre::{Section, eyre::eyre};
use pulldown_cmark::{Options, Parser};
use reqwest::{
    blocking::Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::{
    config::GITHUB_MARKDOWN_API,
    transformer::{WithTransformer, anchor::AnchorTransformer},
};

/// Turns a markdown document into rendered HTML.
pub trait Renderer: Sync {
    fn render(&self, markdown: &str) -> color_eyre::Result<String>;
}

/// Local rendering with pulldown-cmark.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_GFM);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> color_eyre::Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, parser.with_transformer::<AnchorTransformer<'_>>());
        tracing::debug!(size = html.len(), "rendered markdown locally");
        Ok(html)
    }
}

/// Rendering through the GitHub markdown API.
pub struct GithubRenderer {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl GithubRenderer {
    pub fn new(token: Option<String>) -> color_eyre::Result<Self> {
        Self::with_endpoint(GITHUB_MARKDOWN_API, token)
    }

    pub fn with_endpoint(endpoint: &str, token: Option<String>) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ghtoc/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_note(|| "While building the HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token,
        })
    }
}

impl Renderer for GithubRenderer {
    fn render(&self, markdown: &str) -> color_eyre::Result<String> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(markdown.to_owned());
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .with_note(|| format!("While posting markdown to {}", self.endpoint))?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(eyre!("markdown API returned {status}: {body}"));
        }

        tracing::debug!(size = body.len(), "rendered markdown via {}", self.endpoint);
        Ok(body)
    }
}
