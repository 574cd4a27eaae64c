use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{Level, Outline, OutlineEntry};

#[test]
fn level_accepts_one_through_six() {
    let mut runner = TestRunner::new(Config {
        cases: 16,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(1u8..=6), |n| {
            let level = Level::parse(&n.to_string()).expect("valid level");
            prop_assert_eq!(level.get(), usize::from(n));
            prop_assert_eq!(Level::new(n), Some(level));
            Ok(())
        })
        .unwrap();
}

#[test]
fn level_rejects_out_of_range() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(7u8..=u8::MAX), |n| {
            prop_assert!(Level::new(n).is_none());
            prop_assert!(Level::parse(&n.to_string()).is_none());
            Ok(())
        })
        .unwrap();

    assert!(Level::new(0).is_none());
    assert!(Level::parse("").is_none());
    assert!(Level::parse("x").is_none());
}

#[test]
fn entry_renders_indent_per_level() {
    let entry = OutlineEntry {
        indent_level: 2,
        text: "Sub".to_string(),
        link: "#sub".to_string(),
    };
    assert_eq!(entry.render("  "), "    * [Sub](#sub)");
    assert_eq!(entry.render("\t"), "\t\t* [Sub](#sub)");
}

#[test]
fn outline_display_ends_with_blank_line() {
    let outline = Outline::new(vec!["* [A](#a)".to_string(), "  * [B](#b)".to_string()]);
    assert_eq!(outline.to_string(), "* [A](#a)\n  * [B](#b)\n\n");
    assert_eq!(Outline::default().to_string(), "\n");
}
