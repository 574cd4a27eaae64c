use std::collections::HashMap;

use html_escape::encode_double_quoted_attribute;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, TagEnd};

use crate::{transformer::Transformer, utils::slugify};

/// Rewrites every heading into the GitHub anchor idiom:
/// `<hN><a id="user-content-SLUG" class="anchor" href="#SLUG" ...></a>TEXT</hN>`.
pub struct AnchorTransformer<'a> {
    inner: std::vec::IntoIter<Event<'a>>,
}

impl<'a> Iterator for AnchorTransformer<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, I> Transformer<'a, I> for AnchorTransformer<'a>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        let events: Vec<Event<'a>> = inner.collect();
        Self {
            inner: anchor_headings(events).into_iter(),
        }
    }
}

/// Wrap headings in navigable anchors. An explicit `{#id}` wins over the
/// slug computed from the heading text.
pub fn anchor_headings<'a>(events: Vec<Event<'a>>) -> Vec<Event<'a>> {
    let mut out: Vec<Event<'a>> = Vec::with_capacity(events.len());
    let mut slug_counts: HashMap<String, usize> = HashMap::new();

    // Current heading: (level, start_index_in_out, collected_title, existing_id)
    let mut in_heading: Option<(HeadingLevel, usize, String, Option<String>)> = None;

    for ev in events {
        match (&mut in_heading, ev) {
            (None, Event::Start(Tag::Heading { level, id, .. })) => {
                let existing_id = id.as_ref().map(|c| c.to_string());
                // Placeholder, replaced once the title is known.
                let start_index = out.len();
                out.push(Event::Html(CowStr::from("")));
                in_heading = Some((level, start_index, String::new(), existing_id));
            }

            (Some((_, _, title_buf, _)), Event::Text(t)) => {
                title_buf.push_str(t.as_ref());
                out.push(Event::Text(t));
            }

            (Some((_, _, title_buf, _)), Event::Code(t)) => {
                title_buf.push_str(t.as_ref());
                out.push(Event::Code(t));
            }

            (Some((level, start_index, title_buf, existing_id)), Event::End(TagEnd::Heading(_))) => {
                let base = existing_id
                    .take()
                    .unwrap_or_else(|| slugify(title_buf.as_str()));
                let slug = uniquify_slug(base, &mut slug_counts);
                let n = *level as usize;

                out[*start_index] = Event::Html(CowStr::from(format!(
                    r##"<h{n}><a id="user-content-{id}" class="anchor" href="#{href}" aria-hidden="true"></a>"##,
                    id = encode_double_quoted_attribute(&slug),
                    href = urlencoding::encode(&slug),
                )));
                out.push(Event::Html(CowStr::from(format!("</h{n}>\n"))));
                in_heading = None;
            }

            (_, other) => out.push(other),
        }
    }

    out
}

/// GitHub numbering: the first use keeps the bare slug, repeats get `-1`,
/// `-2`, ... skipping any candidate already handed out. `counts` holds every
/// slug emitted so far.
fn uniquify_slug(base: String, counts: &mut HashMap<String, usize>) -> String {
    let mut slug = base.clone();
    while counts.contains_key(&slug) {
        let n = counts.entry(base.clone()).or_insert(0);
        *n += 1;
        slug = format!("{base}-{n}");
    }
    counts.insert(slug.clone(), 0);
    slug
}
