use iced::widget::{button, pick_list, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use super::{layout, Message, RegisterMessage};
use crate::app::state::register::{Gender, RegistrationDraft, SubmitState};

fn field<'a>(label: &'static str, name: &'static str, value: &'a str) -> Column<'a, Message> {
    Column::new()
        .push(text(label).size(14))
        .push(
            text_input(label, value)
                .on_input(move |v| Message::Register(RegisterMessage::FieldEdited(name, v)))
                .padding(10),
        )
        .spacing(5)
}

fn password_field<'a>(
    label: &'static str,
    name: &'static str,
    value: &'a str,
    revealed: bool,
    toggle: RegisterMessage,
) -> Column<'a, Message> {
    Column::new()
        .push(text(label).size(14))
        .push(
            Row::new()
                .push(
                    text_input(label, value)
                        .secure(!revealed)
                        .on_input(move |v| Message::Register(RegisterMessage::FieldEdited(name, v)))
                        .padding(10),
                )
                .push(
                    button(text(if revealed { "Hide" } else { "Show" }).size(14))
                        .style(button::secondary)
                        .on_press(Message::Register(toggle)),
                )
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .spacing(5)
}

pub fn register_view<'a>(
    draft: &'a RegistrationDraft,
    password_revealed: bool,
    confirm_revealed: bool,
    submit: &SubmitState,
) -> Element<'a, Message> {
    let gender = Column::new()
        .push(text("Gender").size(14))
        .push(
            pick_list(&Gender::ALL[..], draft.gender, |g| {
                Message::Register(RegisterMessage::GenderSelected(g))
            })
            .placeholder("Select Gender")
            .padding(10)
            .width(Length::Fill),
        )
        .spacing(5);

    let mut controls = Column::new().spacing(10).push(
        button(text("Register"))
            .style(button::primary)
            .width(Length::Fill)
            .on_press(Message::Register(RegisterMessage::Submit)),
    );
    if *submit == SubmitState::Submitting {
        controls = controls.push(text("Submitting...").size(14));
    }

    layout(
        "User Registration",
        Column::new()
            .push(field("Name", "name", &draft.name))
            .push(field("Email", "email", &draft.email))
            .push(field("Phone", "phone", &draft.phone))
            .push(field("Address", "address", &draft.address))
            .push(field("Pincode", "pincode", &draft.pincode))
            .push(gender)
            .push(field("Age", "age", &draft.age))
            .push(field("Favorites (optional)", "favorites", &draft.favorites))
            .push(password_field(
                "Password",
                "password",
                &draft.password,
                password_revealed,
                RegisterMessage::TogglePasswordVisibility,
            ))
            .push(password_field(
                "Confirm Password",
                "confirm_password",
                &draft.confirm_password,
                confirm_revealed,
                RegisterMessage::ToggleConfirmVisibility,
            ))
            .push(controls)
            .spacing(15)
            .into(),
    )
}
