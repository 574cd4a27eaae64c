use std::{
    fmt, fs,
    io::{self, Read},
    path::PathBuf,
    time::Duration,
};

use color_eyre::{Section, eyre::eyre};
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use url::Url;

/// Where a document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(Url),
    Stdin,
}

/// Document body as handed over by a source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Needs rendering before headings can be extracted.
    Markdown(String),
    /// Already rendered.
    Html(String),
}

impl Source {
    /// Classify a command line argument as a URL or a local path.
    pub fn parse(arg: &str) -> Self {
        match Url::parse(arg) {
            // Single-letter schemes are Windows drive letters.
            Ok(url) if url.scheme().len() > 1 => Self::Remote(url),
            _ => Self::Local(PathBuf::from(arg)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Read or download the document.
    pub fn load(&self) -> color_eyre::Result<Content> {
        match self {
            Self::Local(path) => {
                if !path.exists() {
                    return Err(eyre!("{} does not exist", path.display()));
                }
                let markdown = fs::read_to_string(path)
                    .with_note(|| format!("While reading {}", path.display()))?;
                tracing::debug!(path = %path.display(), size = markdown.len(), "read local file");
                Ok(Content::Markdown(markdown))
            }
            Self::Remote(url) => fetch(url),
            Self::Stdin => {
                let mut markdown = String::new();
                io::stdin()
                    .read_to_string(&mut markdown)
                    .with_note(|| "While reading markdown from stdin")?;
                Ok(Content::Markdown(markdown))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url.as_str()),
            Self::Stdin => f.write_str(""),
        }
    }
}

fn fetch(url: &Url) -> color_eyre::Result<Content> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("ghtoc/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(url.as_str())
        .send()
        .with_note(|| format!("While fetching {url}"))?;
    let status = response.status();
    if !status.is_success() {
        return Err(eyre!("fetching {url} returned {status}"));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let body = response.bytes()?;
    tracing::debug!(
        %url,
        content_type = content_type.as_deref().unwrap_or(""),
        size = body.len(),
        "fetched remote document"
    );

    Ok(classify(&body, content_type.as_deref()))
}

/// Plain text bodies are markdown still to be rendered, everything else is
/// taken as rendered HTML.
pub fn classify(body: &[u8], content_type: Option<&str>) -> Content {
    let text = String::from_utf8_lossy(body).into_owned();
    if content_type.is_some_and(is_plain_text) {
        Content::Markdown(text)
    } else {
        Content::Html(text)
    }
}

pub fn is_plain_text(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("text/plain"))
}

#[cfg(test)]
mod tests;
