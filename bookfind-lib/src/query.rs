//! The search input model.

/// The catalog field a search is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the book title.
    Title,
    /// Match against the author name.
    Author,
    /// Match against the year the book was first published.
    Year,
}

impl SearchField {
    /// The query parameter name the search endpoint expects for this field.
    pub(crate) const fn param(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "first_publish_year",
        }
    }
}

impl Default for SearchField {
    fn default() -> Self {
        Self::Title
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Author => f.write_str("author"),
            Self::Year => f.write_str("year"),
        }
    }
}

/// A validated search input, guaranteed to contain something searchable.
///
/// Empty or whitespace-only input never produces a query, so a search is
/// never issued for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    field: SearchField,
}

impl SearchQuery {
    /// Trims `text` and creates the query, or returns [`None`] when nothing
    /// searchable remains after trimming.
    #[must_use]
    pub fn new<S: Into<String>>(text: S, field: SearchField) -> Option<Self> {
        let text = text.into();
        let text = text.trim();

        if text.is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_owned(),
                field,
            })
        }
    }

    /// The trimmed query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The field this query is scoped to.
    #[must_use]
    pub const fn field(&self) -> SearchField {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_text_is_trimmed() {
        let query = SearchQuery::new("  dune \n", SearchField::Title).unwrap();

        assert_eq!("dune", query.text());
        assert_eq!(SearchField::Title, query.field());
    }

    #[test]
    fn empty_input_is_not_a_query() {
        assert_eq!(None, SearchQuery::new("", SearchField::Title));
        assert_eq!(None, SearchQuery::new("   \t ", SearchField::Author));
    }
}
