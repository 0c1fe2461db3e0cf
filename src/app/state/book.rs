use std::path::PathBuf;
use std::sync::Arc;

use iced::{Element, Task};

use crate::{
    api::{Api, BookId, BookUpdate, CoverUpload},
    app::{
        error::Error,
        menu::Menu,
        message::Message,
        state::{redirect, State},
        view,
    },
    notify::Notifier,
};

/// The cover image of the book under edit. The two representations are
/// mutually exclusive: once a local file is chosen, the preview always
/// reflects it, never the originally fetched remote reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cover {
    Remote(String),
    Local { path: PathBuf, bytes: Vec<u8> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    /// Free text, accepts anything including empty or non-numeric years.
    pub publish_year: String,
    pub cover: Option<Cover>,
}

impl BookDraft {
    pub fn with_field(&self, field: &str, value: String) -> Self {
        let mut draft = self.clone();
        match field {
            "title" => draft.title = value,
            "author" => draft.author = value,
            "publish_year" => draft.publish_year = value,
            _ => tracing::warn!("unknown book field: {}", field),
        }
        draft
    }

    /// Only a locally selected file becomes a binary part; a still-remote
    /// reference is not re-uploaded and an unset cover is omitted.
    fn to_update(&self) -> BookUpdate {
        BookUpdate {
            title: self.title.clone(),
            author: self.author.clone(),
            publish_year: self.publish_year.clone(),
            cover: match &self.cover {
                Some(Cover::Local { path, bytes }) => Some(CoverUpload {
                    file_name: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "cover".to_string()),
                    bytes: bytes.clone(),
                }),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Loading,
    Ready,
    Saving,
}

pub struct BookEditPanel {
    id: BookId,
    draft: BookDraft,
    state: EditState,
    alert: Option<String>,
}

impl BookEditPanel {
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            draft: BookDraft::default(),
            state: EditState::Loading,
            alert: None,
        }
    }
}

impl State for BookEditPanel {
    fn view(&self) -> Element<'_, view::Message> {
        let content = view::book::book_view(&self.draft, self.state);
        match &self.alert {
            Some(message) => view::alert(content, message),
            None => content,
        }
    }

    fn update(
        &mut self,
        api: Arc<dyn Api>,
        notifier: &dyn Notifier,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::BookLoaded(id, res) => {
                // A completion for another identifier belongs to a
                // previous incarnation of this panel and is ignored.
                if id != self.id {
                    return Task::none();
                }
                self.state = EditState::Ready;
                match res {
                    Ok(book) => {
                        self.draft = BookDraft {
                            title: book.title,
                            author: book.author,
                            publish_year: book.publish_year,
                            cover: book.cover_image.map(Cover::Remote),
                        };
                    }
                    Err(e) => {
                        tracing::error!("failed to load book {}: {}", self.id, e);
                        self.alert = Some("An error happened. Please check the logs.".to_string());
                    }
                }
                Task::none()
            }
            Message::View(view::Message::CloseAlert) => {
                self.alert = None;
                Task::none()
            }
            Message::View(view::Message::Book(msg)) => match msg {
                view::BookMessage::FieldEdited(field, value) => {
                    self.draft = self.draft.with_field(field, value);
                    Task::none()
                }
                view::BookMessage::SelectCover => Task::perform(
                    async move {
                        if let Some(handle) = rfd::AsyncFileDialog::new()
                            .set_title("Choose a cover image")
                            .add_filter("Images", &["png", "jpg", "jpeg", "gif"])
                            .pick_file()
                            .await
                        {
                            let bytes = handle.read().await;
                            Some((handle.path().to_path_buf(), bytes))
                        } else {
                            None
                        }
                    },
                    Message::CoverSelected,
                ),
                view::BookMessage::Save => {
                    self.state = EditState::Saving;
                    let id = self.id.clone();
                    let update = self.draft.to_update();
                    Task::perform(
                        async move { api.update_book(&id, update).await.map_err(Error::from) },
                        Message::BookSaved,
                    )
                }
            },
            Message::CoverSelected(Some((path, bytes))) => {
                self.draft.cover = Some(Cover::Local { path, bytes });
                Task::none()
            }
            Message::CoverSelected(None) => Task::none(),
            Message::BookSaved(res) => {
                self.state = EditState::Ready;
                match res {
                    Ok(()) => {
                        notifier.success("Book Edited Successfully".to_string());
                        redirect(Menu::Home)
                    }
                    Err(e) => {
                        tracing::error!("failed to save book {}: {}", self.id, e);
                        notifier.error("Error".to_string());
                        Task::none()
                    }
                }
            }
            _ => Task::none(),
        }
    }

    fn reload(&mut self, api: Arc<dyn Api>) -> Task<Message> {
        *self = Self::new(self.id.clone());
        let id = self.id.clone();
        Task::perform(
            async move {
                let res = api.get_book(&id).await.map_err(Error::from);
                (id, res)
            },
            |(id, res)| Message::BookLoaded(id, res),
        )
    }
}
