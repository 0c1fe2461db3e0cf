mod message;
mod warning;

pub mod book;
pub mod home;
pub mod register;

pub use message::*;

use iced::widget::{button, center, container, opaque, scrollable, text, Column, Row, Stack};
use iced::{Alignment, Background, Border, Color, Element, Length};

use crate::app::menu::Menu;
use crate::notify::{Level, Notification};

fn header(title: &str) -> Row<'_, Message> {
    Row::new()
        .push(text(title).size(26).width(Length::Fill))
        .push(
            button(text("Books"))
                .style(button::secondary)
                .on_press(Message::Menu(Menu::Home)),
        )
        .push(
            button(text("Register"))
                .style(button::secondary)
                .on_press(Message::Menu(Menu::Register)),
        )
        .spacing(10)
        .align_y(Alignment::Center)
}

pub fn layout<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(scrollable(
        Column::new()
            .push(header(title))
            .push(content)
            .spacing(20)
            .padding(30)
            .max_width(700),
    ))
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Loading..."))
        .padding(50)
        .center_x(Length::Fill)
        .into()
}

/// Blocking alert overlaid on top of the panel content: the content below
/// stays visible but cannot be interacted with until dismissed.
pub fn alert<'a>(base: Element<'a, Message>, message: &'a str) -> Element<'a, Message> {
    let dialog = container(
        Column::new()
            .push(text(message))
            .push(button(text("OK")).on_press(Message::CloseAlert))
            .spacing(20)
            .align_x(Alignment::Center),
    )
    .width(360)
    .padding(24)
    .style(container::rounded_box);

    let overlay = opaque(center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.8,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }));

    Stack::new().push(base).push(overlay).into()
}

/// The notification banners, most recent last, each with its own dismiss
/// control.
pub fn notifications(items: Vec<Notification>) -> Element<'static, Message> {
    let mut banners = Column::new().spacing(1);
    for (i, notification) in items.into_iter().enumerate() {
        let background = match notification.level {
            Level::Success => Color::from_rgb(0.13, 0.55, 0.33),
            Level::Error => Color::from_rgb(0.75, 0.18, 0.18),
        };
        banners = banners.push(
            container(
                Row::new()
                    .push(text(notification.message).width(Length::Fill))
                    .push(
                        button(text("Dismiss"))
                            .style(button::text)
                            .on_press(Message::DismissNotification(i)),
                    )
                    .spacing(10)
                    .align_y(Alignment::Center),
            )
            .padding(10)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(Color::WHITE),
                border: Border::default(),
                ..container::Style::default()
            }),
        );
    }
    banners.into()
}
