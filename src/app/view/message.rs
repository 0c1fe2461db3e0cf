use crate::app::menu::Menu;
use crate::app::state::register::Gender;

#[derive(Debug, Clone)]
pub enum Message {
    Menu(Menu),
    Register(RegisterMessage),
    Book(BookMessage),
    DismissNotification(usize),
    CloseAlert,
}

#[derive(Debug, Clone)]
pub enum RegisterMessage {
    FieldEdited(&'static str, String),
    GenderSelected(Gender),
    TogglePasswordVisibility,
    ToggleConfirmVisibility,
    Submit,
}

#[derive(Debug, Clone)]
pub enum BookMessage {
    FieldEdited(&'static str, String),
    SelectCover,
    Save,
}
