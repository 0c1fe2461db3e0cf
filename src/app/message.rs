use std::path::PathBuf;

use crate::api::{Book, BookId};
use crate::app::{error::Error, view};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    Registered(Result<(), Error>),
    /// Result of the book fetch, tagged with the identifier it was issued
    /// for so a stale completion can be told apart from the current one.
    BookLoaded(BookId, Result<Book, Error>),
    BookSaved(Result<(), Error>),
    BooksListed(Result<Vec<Book>, Error>),
    /// Outcome of the native file dialog, `None` if the user cancelled.
    CoverSelected(Option<(PathBuf, Vec<u8>)>),
}
