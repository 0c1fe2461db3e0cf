pub mod book;
pub mod home;
pub mod register;

use std::sync::Arc;

use iced::{Element, Task};

use crate::{
    api::Api,
    app::{menu::Menu, message::Message, view},
    notify::Notifier,
};

pub use book::BookEditPanel;
pub use home::HomePanel;
pub use register::RegisterPanel;

pub trait State {
    fn view(&self) -> Element<'_, view::Message>;
    fn update(
        &mut self,
        _api: Arc<dyn Api>,
        _notifier: &dyn Notifier,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    fn interrupt(&mut self) {}
    fn reload(&mut self, _api: Arc<dyn Api>) -> Task<Message> {
        Task::none()
    }
}

/// redirect to another state with a menu message
pub fn redirect(menu: Menu) -> Task<Message> {
    Task::perform(async { menu }, |menu| {
        Message::View(view::Message::Menu(menu))
    })
}
