use crate::{
    config::{DEFAULT_MIN_LEVEL, OutlineConfig},
    types::{HeadingRecord, Outline, OutlineEntry},
    utils::{clean_text, decode_fragment, escape_spec_chars, strip_control},
};

/// Turn extracted headings into an indented markdown outline.
///
/// Indentation is anchored on the shallowest heading present (before any
/// filtering), so a document whose top headings are `h2` renders them at
/// indentation zero.
pub fn build_outline<I>(records: I, cfg: &OutlineConfig) -> Outline
where
    I: IntoIterator<Item = HeadingRecord>,
{
    let records: Vec<HeadingRecord> = records.into_iter().collect();
    let min_level = min_level(&records);

    tracing::debug!(
        headings = records.len(),
        min_level,
        start_depth = cfg.start_depth,
        max_depth = cfg.max_depth,
        "building outline"
    );

    let mut outline = Outline::default();
    for record in records.iter().filter(|r| in_window(r.level.get(), cfg)) {
        let entry = outline_entry(record, min_level, cfg);
        outline.push(entry.render(&cfg.indent));
    }
    outline
}

fn min_level(records: &[HeadingRecord]) -> usize {
    records
        .iter()
        .map(|r| r.level.get())
        .min()
        .unwrap_or(DEFAULT_MIN_LEVEL)
}

/// Whether a heading at `level` falls inside the configured depth window.
pub fn in_window(level: usize, cfg: &OutlineConfig) -> bool {
    if level <= cfg.start_depth {
        return false;
    }
    cfg.max_depth == 0 || level <= cfg.max_depth
}

pub fn outline_entry(record: &HeadingRecord, min_level: usize, cfg: &OutlineConfig) -> OutlineEntry {
    let mut text = clean_text(&record.text);
    if cfg.escape {
        text = escape_spec_chars(&text);
    }

    OutlineEntry {
        indent_level: record
            .level
            .get()
            .saturating_sub(min_level)
            .saturating_sub(cfg.start_depth),
        text,
        link: resolve_link(&record.fragment, cfg.absolute_prefix.as_deref()),
    }
}

/// Decode `fragment` and, when a prefix is given, make it absolute.
pub fn resolve_link(fragment: &str, absolute_prefix: Option<&str>) -> String {
    let fragment = strip_control(fragment);
    let decoded = decode_fragment(&fragment);
    match absolute_prefix {
        Some(prefix) => format!("{prefix}{decoded}"),
        None => decoded.into_owned(),
    }
}
