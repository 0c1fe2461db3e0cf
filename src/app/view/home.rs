use iced::widget::{button, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::{layout, loading, warning::warn, Message};
use crate::api::Book;
use crate::app::{error::Error, menu::Menu};

pub fn home_view<'a>(
    books: &'a [Book],
    in_flight: bool,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let mut content = Column::new().spacing(10).push(warn(warning));

    if in_flight {
        content = content.push(loading());
    } else if books.is_empty() {
        content = content.push(text("No books yet."));
    } else {
        for book in books {
            content = content.push(
                Row::new()
                    .push(text(&book.title).width(Length::Fill))
                    .push(text(&book.author).size(14))
                    .push(text(&book.publish_year).size(14))
                    .push(
                        button(text("Edit").size(14))
                            .style(button::secondary)
                            .on_press(Message::Menu(Menu::EditBook(book.id.clone()))),
                    )
                    .spacing(15)
                    .align_y(Alignment::Center),
            );
        }
    }

    layout("Books", content.into())
}
