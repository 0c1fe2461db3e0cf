use std::sync::Arc;

use iced::{Element, Task};

use crate::{
    api::{Api, Book},
    app::{error::Error, message::Message, state::State, view},
    notify::Notifier,
};

/// The book listing, entry point of the application and navigation target
/// after a successful book save.
pub struct HomePanel {
    books: Vec<Book>,
    loading: bool,
    warning: Option<Error>,
}

impl HomePanel {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            loading: false,
            warning: None,
        }
    }
}

impl Default for HomePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl State for HomePanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::home::home_view(&self.books, self.loading, self.warning.as_ref())
    }

    fn update(
        &mut self,
        _api: Arc<dyn Api>,
        _notifier: &dyn Notifier,
        message: Message,
    ) -> Task<Message> {
        if let Message::BooksListed(res) = message {
            self.loading = false;
            match res {
                Ok(books) => {
                    self.warning = None;
                    self.books = books;
                }
                Err(e) => {
                    tracing::error!("failed to list books: {}", e);
                    self.warning = Some(e);
                }
            }
        }
        Task::none()
    }

    fn reload(&mut self, api: Arc<dyn Api>) -> Task<Message> {
        *self = Self::new();
        self.loading = true;
        Task::perform(
            async move { api.list_books().await.map_err(Error::from) },
            Message::BooksListed,
        )
    }
}
