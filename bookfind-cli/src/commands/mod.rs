use crate::{interact, render};

use bookfind::{BookRecord, SearchField, SearchQuery, Strategy};

use clap::Subcommand;
use log::{error, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search books by title
    ///
    /// Only books whose title contains the query text are shown, repeated
    /// titles are dropped and at most 20 unique books are listed.
    #[clap(arg_required_else_help = true)]
    Title {
        /// The title text to search for
        query: String,
    },

    /// Search books by author name
    #[clap(arg_required_else_help = true)]
    Author {
        /// The author name to search for
        query: String,
    },

    /// Search books by the year they were first published
    #[clap(arg_required_else_help = true)]
    Year {
        /// The first publish year to search for
        year: i32,
    },
}

impl Commands {
    pub fn execute(self, interactive: bool) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Title { query } => {
                let query = match SearchQuery::new(query, SearchField::Title) {
                    Some(query) => query,
                    // an empty query is silently ignored
                    None => return Ok(String::new()),
                };

                trace!("Searching for books with a title containing '{}'", query.text());

                // transport failures degrade to the empty state here, the
                // error only reaches the log
                let books = match bookfind::books(&query, &Strategy::curated()) {
                    Ok(books) => books,
                    Err(err) => {
                        error!("Error fetching books: {err}");
                        Vec::new()
                    }
                };

                finish(books, interactive, "No books found")
            }
            Commands::Author { query } => {
                scoped_search(SearchQuery::new(query, SearchField::Author), interactive)
            }
            Commands::Year { year } => {
                scoped_search(SearchQuery::new(year.to_string(), SearchField::Year), interactive)
            }
        }
    }
}

// Field-scoped searches trust the server-side match and surface failures
// to the user instead of logging them away.
fn scoped_search(
    query: Option<SearchQuery>,
    interactive: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let query = match query {
        Some(query) => query,
        None => return Ok(String::new()),
    };

    trace!("Searching for books by {} of '{}'", query.field(), query.text());

    match bookfind::books(&query, &Strategy::direct()) {
        Ok(books) => finish(books, interactive, "No results found"),
        Err(err) => {
            error!("Error fetching books: {err}");
            Ok("Something went wrong. Please try again.".to_owned())
        }
    }
}

fn finish(
    books: Vec<BookRecord>,
    interactive: bool,
    empty_message: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if books.is_empty() {
        return Ok(empty_message.to_owned());
    }

    if interactive {
        let book = interact::user_select_book(books)?;
        return Ok(render::card(&book));
    }

    Ok(render::listing(&books))
}
