#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod cover;
mod error;
mod pipeline;
mod query;
mod record;
pub mod session;

pub use error::{Error, ErrorKind};
pub use pipeline::Strategy;
pub use query::{SearchField, SearchQuery};
pub use record::BookRecord;

use log::trace;

type Client = reqwest::blocking::Client;

/// Search books by title and normalize the response with the curated
/// strategy: only titles containing the query keyword are kept, repeated
/// titles are dropped (first occurrence wins), at most 20 unique records
/// are returned and each record carries a resolved cover URL when the
/// catalog knows one.
///
/// An empty or whitespace-only `title` is a no-op: no request is issued
/// and an empty list is returned.
///
/// # Errors
///
/// An `Err` is returned when the request to the catalog fails.
/// An `Err` is returned when the response cannot be deserialized.
#[inline]
pub fn books_by_title(title: &str) -> Result<Vec<BookRecord>, Error> {
    trace!("Search books by title of '{title}'");
    dispatch(
        SearchQuery::new(title, SearchField::Title),
        &Strategy::curated(),
    )
}

/// Search books by author name, trusting the server-side match: every
/// returned doc is projected in server order, without deduplication, cap
/// or cover resolution.
///
/// An empty or whitespace-only `author` is a no-op: no request is issued
/// and an empty list is returned.
///
/// # Errors
///
/// An `Err` is returned when the request to the catalog fails.
/// An `Err` is returned when the response cannot be deserialized.
#[inline]
pub fn books_by_author(author: &str) -> Result<Vec<BookRecord>, Error> {
    trace!("Search books by author of '{author}'");
    dispatch(
        SearchQuery::new(author, SearchField::Author),
        &Strategy::direct(),
    )
}

/// Search books first published in `year`, trusting the server-side
/// match: every returned doc is projected in server order, without
/// deduplication, cap or cover resolution.
///
/// # Errors
///
/// An `Err` is returned when the request to the catalog fails.
/// An `Err` is returned when the response cannot be deserialized.
#[inline]
pub fn books_by_year(year: i32) -> Result<Vec<BookRecord>, Error> {
    trace!("Search books first published in '{year}'");
    dispatch(
        SearchQuery::new(year.to_string(), SearchField::Year),
        &Strategy::direct(),
    )
}

/// Search books with an explicit query and normalization strategy.
///
/// # Errors
///
/// An `Err` is returned when the request to the catalog fails.
/// An `Err` is returned when the response cannot be deserialized.
pub fn books(query: &SearchQuery, strategy: &Strategy) -> Result<Vec<BookRecord>, Error> {
    run::<Client>(query, strategy)
}

fn dispatch(query: Option<SearchQuery>, strategy: &Strategy) -> Result<Vec<BookRecord>, Error> {
    match query {
        Some(query) => run::<Client>(&query, strategy),
        None => Ok(Vec::new()),
    }
}

fn run<C: api::Client>(query: &SearchQuery, strategy: &Strategy) -> Result<Vec<BookRecord>, Error> {
    let docs = api::open_library::search::<C>(query)?;
    Ok(pipeline::normalize(docs, query, strategy))
}
