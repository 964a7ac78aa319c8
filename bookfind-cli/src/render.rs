//! Plain text rendering of the result cards.

use bookfind::BookRecord;

const NO_COVER: &str = "No Cover";

/// Renders the whole result list, one card per book.
pub fn listing(books: &[BookRecord]) -> String {
    books.iter().map(card).collect::<Vec<_>>().join("\n\n")
}

/// Renders a single book card.
pub fn card(book: &BookRecord) -> String {
    format!(
        "{}\n  by {}\n  first published: {}\n  cover: {}",
        book.title,
        book.author,
        book.year_label(),
        book.cover.as_deref().unwrap_or(NO_COVER)
    )
}

#[cfg(test)]
mod tests {
    use super::{card, listing};
    use bookfind::BookRecord;

    fn record(title: &str, cover: Option<&str>) -> BookRecord {
        BookRecord {
            id: format!("/works/{title}"),
            title: title.to_owned(),
            author: "Frank Herbert".to_owned(),
            year: Some(1965),
            cover: cover.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn card_shows_the_resolved_cover_url() {
        let url = "https://covers.openlibrary.org/b/id/11481354-M.jpg";

        let card = card(&record("Dune", Some(url)));

        assert_eq!(
            format!("Dune\n  by Frank Herbert\n  first published: 1965\n  cover: {url}"),
            card
        );
    }

    #[test]
    fn card_without_a_cover_shows_the_placeholder() {
        let card = card(&record("Dune", None));

        assert!(card.ends_with("cover: No Cover"));
    }

    #[test]
    fn missing_year_renders_as_not_available() {
        let mut book = record("Dune", None);
        book.year = None;

        assert!(card(&book).contains("first published: N/A"));
    }

    #[test]
    fn listing_separates_cards_with_a_blank_line() {
        let books = vec![record("Dune", None), record("Dune Messiah", None)];

        let listing = listing(&books);

        assert_eq!(2, listing.matches("by Frank Herbert").count());
        assert!(listing.contains("\n\n"));
    }
}
