//! The result normalization pipeline.
//!
//! Transforms the raw docs returned by the catalog into the ordered list of
//! [`BookRecord`]s to render. The steps run in a fixed order per doc:
//! keyword filter, title deduplication, result cap, field projection. Which
//! steps apply is decided by the [`Strategy`].

use std::collections::HashSet;

use log::trace;

use crate::{api::open_library::Doc, cover, query::SearchQuery, record::BookRecord};

/// How a raw search response is normalized before rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strategy {
    filter: bool,
    dedupe: bool,
    cap: Option<usize>,
    covers: bool,
    missing_author: &'static str,
}

impl Strategy {
    /// The curated strategy for title searches: keep only docs whose title
    /// contains the query keyword, drop repeated titles (first occurrence
    /// wins), stop at 20 unique results and resolve cover URLs.
    #[must_use]
    pub const fn curated() -> Self {
        Self {
            filter: true,
            dedupe: true,
            cap: Some(20),
            covers: true,
            missing_author: "Unknown Author",
        }
    }

    /// The direct strategy for field-scoped searches: the server already
    /// matched on the selected field, so every doc is projected as-is, in
    /// server order, without covers.
    #[must_use]
    pub const fn direct() -> Self {
        Self {
            filter: false,
            dedupe: false,
            cap: None,
            covers: false,
            missing_author: "Unknown",
        }
    }
}

pub(crate) fn normalize(docs: Vec<Doc>, query: &SearchQuery, strategy: &Strategy) -> Vec<BookRecord> {
    let keyword = query.text().to_lowercase();

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (position, doc) in docs.into_iter().enumerate() {
        if let Some(cap) = strategy.cap {
            // the cap counts unique survivors, so it applies after the
            // filter and dedupe steps below have had their say
            if records.len() == cap {
                break;
            }
        }

        if strategy.filter && !title_contains(&doc, &keyword) {
            continue;
        }

        if strategy.dedupe {
            let key = match title_key(&doc) {
                Some(key) => key,
                None => continue,
            };

            if !seen.insert(key) {
                continue;
            }
        }

        records.push(project(doc, position, strategy));
    }

    trace!("Normalized response down to {} records", records.len());

    records
}

fn title_contains(doc: &Doc, keyword: &str) -> bool {
    doc.title
        .as_ref()
        .map_or(false, |title| title.to_lowercase().contains(keyword))
}

// The normalized title used for deduplication. A doc without a usable
// title has no key and never survives the dedupe step.
fn title_key(doc: &Doc) -> Option<String> {
    let key = doc.title.as_ref()?.to_lowercase().trim().to_owned();

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

fn project(doc: Doc, position: usize, strategy: &Strategy) -> BookRecord {
    let cover = if strategy.covers {
        cover::cover_url(&doc)
    } else {
        None
    };

    let Doc {
        title,
        author_name,
        first_publish_year,
        key,
        ..
    } = doc;

    BookRecord {
        id: key.unwrap_or_else(|| format!("result-{position}")),
        title: title.unwrap_or_else(|| "Untitled".to_owned()),
        author: if author_name.is_empty() {
            strategy.missing_author.to_owned()
        } else {
            author_name.join(", ")
        },
        year: first_publish_year,
        cover,
    }
}
