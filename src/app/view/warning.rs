use iced::widget::{container, text, Column, Container};
use iced::{Background, Border, Color, Length};

use crate::api::ApiError;
use crate::app::error::Error;

/// Simple warning message displayed to non technical user.
pub struct WarningMessage(String);

impl From<&Error> for WarningMessage {
    fn from(error: &Error) -> WarningMessage {
        match error {
            Error::Api(e) => match e {
                ApiError::Transport(_) => {
                    WarningMessage("Communication with the server failed".to_string())
                }
                ApiError::NotSuccess {
                    status,
                    message: Some(m),
                } => WarningMessage(format!("HTTP error {}: {}", status, m)),
                ApiError::NotSuccess {
                    status,
                    message: None,
                } => WarningMessage(format!("HTTP error {}", status)),
                ApiError::Decode(_) => {
                    WarningMessage("Unexpected response from the server".to_string())
                }
            },
            Error::Config(e) => WarningMessage(e.to_string()),
            Error::Unexpected(_) => WarningMessage("Unknown error".to_string()),
        }
    }
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn warn<'a, T: 'a>(error: Option<&Error>) -> Container<'a, T> {
    if let Some(error) = error {
        let message: WarningMessage = error.into();
        container(text(message.to_string()))
            .padding(15)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color::from_rgb(0.98, 0.87, 0.87))),
                text_color: Some(Color::from_rgb(0.5, 0.1, 0.1)),
                border: Border {
                    radius: 4.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
    } else {
        container(Column::new()).width(Length::Fill)
    }
}
