use bookfind::BookRecord;
use eyre::{eyre, Context, Result};

pub fn user_select<S: ToString>(prompt: &str, items: &[S]) -> Result<usize> {
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .wrap_err_with(|| eyre!("User selection cancelled"))?;

    if let Some(index) = selection {
        Ok(index)
    } else {
        Err(eyre!("No selection made - cancelling operation"))
    }
}

pub fn user_select_book(mut books: Vec<BookRecord>) -> Result<BookRecord> {
    let items = book_lines(&books);
    user_select("Choose a book", &items).map(|i| books.remove(i))
}

fn book_lines(books: &[BookRecord]) -> Vec<String> {
    books
        .iter()
        .map(|b| format!("{} ({})", b.title, b.year_label()))
        .collect()
}
