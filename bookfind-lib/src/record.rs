//! The normalized book entity produced by the pipeline.

/// A display-ready book record derived from one raw catalog doc.
///
/// Records are built by the normalization pipeline and are not mutated
/// afterwards; missing fields have already been substituted with their
/// display defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookRecord {
    /// A stable identifier for the record, the catalog work key when the
    /// doc carries one.
    pub id: String,
    /// The book title, `Untitled` when the doc has none.
    pub title: String,
    /// All author names joined with `, `, or the missing-author label of
    /// the strategy that produced this record.
    pub author: String,
    /// The year the book was first published, if known.
    pub year: Option<i32>,
    /// A resolved cover image URL, if the doc carried any cover identifier
    /// and the strategy resolves covers.
    pub cover: Option<String>,
}

impl BookRecord {
    /// The publish year as display text, `N/A` when unknown.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year
            .map_or_else(|| "N/A".to_owned(), |year| year.to_string())
    }
}
