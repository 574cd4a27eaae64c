use std::{fs, path::PathBuf};

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use tempfile::TempDir;

use super::{Content, Source, classify, is_plain_text};

#[test]
fn urls_are_remote_paths_are_local() {
    assert!(Source::parse("https://github.com/owner/repo/blob/main/README.md").is_remote());
    assert!(Source::parse("http://localhost:8080/doc").is_remote());
    assert_eq!(
        Source::parse("README.md"),
        Source::Local(PathBuf::from("README.md"))
    );
    assert_eq!(
        Source::parse("docs/guide/intro.md"),
        Source::Local(PathBuf::from("docs/guide/intro.md"))
    );
    assert!(!Source::parse(r"C:\docs\README.md").is_remote());
}

#[test]
fn relative_paths_are_never_remote() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec("[A-Za-z0-9_]{1,10}", 1..4),
            |segments| {
                let arg = format!("{}.md", segments.join("/"));
                prop_assert!(!Source::parse(&arg).is_remote());
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn display_uses_the_given_path() {
    assert_eq!(Source::parse("README.md").to_string(), "README.md");
    assert_eq!(
        Source::parse("https://example.com/a.md").to_string(),
        "https://example.com/a.md"
    );
    assert_eq!(Source::Stdin.to_string(), "");
}

#[test]
fn plain_text_detection_ignores_parameters() {
    assert!(is_plain_text("text/plain"));
    assert!(is_plain_text("text/plain; charset=utf-8"));
    assert!(is_plain_text("Text/Plain;charset=utf-8"));
    assert!(!is_plain_text("text/html; charset=utf-8"));
    assert!(!is_plain_text("application/octet-stream"));
}

#[test]
fn plain_text_needs_rendering() {
    assert_eq!(
        classify(b"# Title", Some("text/plain; charset=utf-8")),
        Content::Markdown("# Title".to_string())
    );
    assert_eq!(
        classify(b"<h1>Title</h1>", Some("text/html")),
        Content::Html("<h1>Title</h1>".to_string())
    );
    assert_eq!(
        classify(b"<h1>Title</h1>", None),
        Content::Html("<h1>Title</h1>".to_string())
    );
}

#[test]
fn local_file_is_read_as_markdown() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("README.md");
    fs::write(&path, "# Hello\n").unwrap();

    let content = Source::Local(path).load().unwrap();
    assert_eq!(content, Content::Markdown("# Hello\n".to_string()));
}

#[test]
fn missing_local_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.md");

    let err = Source::Local(path).load().unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
