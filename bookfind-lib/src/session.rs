//! Display state with a commit-if-current guard for overlapping searches.
//!
//! A search surface that fires requests while earlier ones are still in
//! flight has no ordering guarantee from the transport, so results are
//! only committed when they belong to the most recently issued request.
//! Everything older is dropped on arrival.

use crate::{record::BookRecord, Error};

/// Proof of which request an outcome belongs to.
///
/// Handed out by [`SearchSession::begin`] and consumed by
/// [`SearchSession::commit`]. A ticket is invalidated as soon as a newer
/// one is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// The display state of one search surface.
///
/// Mirrors what a result view holds: the committed records, the error of
/// the last failed search and whether a search is still in flight.
#[derive(Debug, Default)]
pub struct SearchSession {
    current: u64,
    loading: bool,
    books: Vec<BookRecord>,
    error: Option<Error>,
}

impl SearchSession {
    /// Creates an idle session with no committed results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight search and returns its ticket,
    /// invalidating every ticket issued before it.
    pub fn begin(&mut self) -> Ticket {
        self.current += 1;
        self.loading = true;
        Ticket(self.current)
    }

    /// Commits a search outcome if `ticket` is still the latest one.
    ///
    /// A successful outcome replaces the committed records and clears the
    /// error; a failed one clears the records and stores the error. Stale
    /// outcomes leave the whole state untouched, including the loading
    /// flag, since a newer request is still the one being waited on.
    ///
    /// Returns whether the outcome was committed.
    pub fn commit(&mut self, ticket: Ticket, outcome: Result<Vec<BookRecord>, Error>) -> bool {
        if ticket.0 != self.current {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(books) => {
                self.books = books;
                self.error = None;
            }
            Err(err) => {
                self.books.clear();
                self.error = Some(err);
            }
        }

        true
    }

    /// Whether the latest issued search is still waiting for its outcome.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The records of the last committed successful search.
    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// The error of the last committed failed search, if any.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}
