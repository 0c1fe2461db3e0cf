pub mod menu;
pub mod message;
pub mod state;
pub mod view;

mod error;

use std::sync::Arc;

use iced::{Element, Task};
use iced::widget::Column;

pub use error::Error;
pub use message::Message;

use crate::{
    api::Api,
    notify::{Notifier, Toasts},
};
use menu::Menu;
use state::{BookEditPanel, HomePanel, RegisterPanel, State};

struct Panels {
    current: Menu,
    home: HomePanel,
    register: RegisterPanel,
    book: BookEditPanel,
}

impl Panels {
    fn new() -> Panels {
        Self {
            current: Menu::Home,
            home: HomePanel::new(),
            register: RegisterPanel::new(),
            // Placeholder until a book is opened from the listing.
            book: BookEditPanel::new(String::new()),
        }
    }

    fn current(&self) -> &dyn State {
        match self.current {
            Menu::Home => &self.home,
            Menu::Register => &self.register,
            Menu::EditBook(_) => &self.book,
        }
    }

    fn current_mut(&mut self) -> &mut dyn State {
        match self.current {
            Menu::Home => &mut self.home,
            Menu::Register => &mut self.register,
            Menu::EditBook(_) => &mut self.book,
        }
    }
}

pub struct App {
    api: Arc<dyn Api>,
    toasts: Arc<Toasts>,
    panels: Panels,
}

impl App {
    pub fn new(api: Arc<dyn Api>) -> (App, Task<Message>) {
        let mut panels = Panels::new();
        let cmd = panels.home.reload(api.clone());
        (
            Self {
                api,
                toasts: Arc::new(Toasts::default()),
                panels,
            },
            cmd,
        )
    }

    pub fn title(&self) -> String {
        match &self.panels.current {
            Menu::Home => "Bookstore".to_string(),
            Menu::Register => "Bookstore - Register".to_string(),
            Menu::EditBook(_) => "Bookstore - Edit Book".to_string(),
        }
    }

    fn set_current_panel(&mut self, menu: Menu) -> Task<Message> {
        self.panels.current_mut().interrupt();

        // Opening a book rebuilds the edit panel for that identifier;
        // whatever a previous incarnation had in flight is ignored.
        if let Menu::EditBook(id) = &menu {
            self.panels.book = BookEditPanel::new(id.clone());
        }

        self.panels.current = menu;
        self.panels.current_mut().reload(self.api.clone())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Menu(menu)) => self.set_current_panel(menu),
            Message::View(view::Message::DismissNotification(index)) => {
                self.toasts.dismiss(index);
                Task::none()
            }
            _ => {
                let notifier: Arc<dyn Notifier> = self.toasts.clone();
                self.panels
                    .current_mut()
                    .update(self.api.clone(), notifier.as_ref(), message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self.panels.current().view().map(Message::View);
        let toasts = self.toasts.current();
        if toasts.is_empty() {
            content
        } else {
            Column::new()
                .push(view::notifications(toasts).map(Message::View))
                .push(content)
                .into()
        }
    }
}
