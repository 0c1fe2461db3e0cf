use crate::api::BookId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    Home,
    Register,
    EditBook(BookId),
}
