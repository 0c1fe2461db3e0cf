use iced::widget::{button, image, text, text_input, Column, Image, Row};
use iced::{Alignment, Element, Length};

use super::{layout, loading, BookMessage, Message};
use crate::app::state::book::{BookDraft, Cover, EditState};

fn field<'a>(label: &'static str, name: &'static str, value: &'a str) -> Column<'a, Message> {
    Column::new()
        .push(text(label).size(14))
        .push(
            text_input(label, value)
                .on_input(move |v| Message::Book(BookMessage::FieldEdited(name, v)))
                .padding(10),
        )
        .spacing(5)
}

pub fn book_view(draft: &BookDraft, state: EditState) -> Element<'_, Message> {
    if state == EditState::Loading {
        return layout("Edit Book", loading());
    }

    // A locally chosen file always wins over the fetched remote reference.
    let preview: Element<'_, Message> = match &draft.cover {
        Some(Cover::Local { bytes, .. }) => Image::new(image::Handle::from_bytes(bytes.clone()))
            .width(128)
            .height(128)
            .into(),
        Some(Cover::Remote(reference)) => text(format!("Current cover: {}", reference))
            .size(14)
            .into(),
        None => text("No cover image").size(14).into(),
    };

    let cover = Column::new()
        .push(text("Cover Image").size(14))
        .push(
            Row::new()
                .push(
                    button(text("Choose image..."))
                        .style(button::secondary)
                        .on_press(Message::Book(BookMessage::SelectCover)),
                )
                .push(preview)
                .spacing(15)
                .align_y(Alignment::Center),
        )
        .spacing(5);

    let mut controls = Column::new().spacing(10).push(
        button(text("Save"))
            .style(button::primary)
            .width(Length::Fill)
            .on_press(Message::Book(BookMessage::Save)),
    );
    if state == EditState::Saving {
        controls = controls.push(text("Saving...").size(14));
    }

    layout(
        "Edit Book",
        Column::new()
            .push(field("Title", "title", &draft.title))
            .push(field("Author", "author", &draft.author))
            .push(field("Publish Year", "publish_year", &draft.publish_year))
            .push(cover)
            .push(controls)
            .spacing(15)
            .into(),
    )
}
