pub mod client;
pub use client::HttpClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type BookId = String;

/// Payload of the user registration create request.
///
/// All ten draft attributes are sent, `confirmPassword` included, as the
/// registration endpoint expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
    pub gender: String,
    pub age: String,
    pub favorites: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(
        rename = "publishYear",
        deserialize_with = "crate::utils::serde::number_or_string",
        default
    )]
    pub publish_year: String,
    /// Opaque server-side reference (URL or encoded blob), merely round-tripped.
    #[serde(rename = "coverImage", default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetBookResult {
    pub data: Book,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListBooksResult {
    pub data: Vec<Book>,
}

/// Fields of a book update request. The cover is present only when the user
/// selected a local file; an unset cover is omitted from the payload
/// entirely, never sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    #[serde(rename = "publishYear")]
    pub publish_year: String,
    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverUpload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverUpload {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Error body some endpoints return alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure, before any response was obtained.
    Transport(String),
    /// Non-2xx response. `message` is the server-supplied `message`
    /// attribute when the body carried one.
    NotSuccess {
        status: u16,
        message: Option<String>,
    },
    /// A 2xx response whose body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// The server-supplied message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotSuccess {
                message: Some(m), ..
            } => Some(m),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Request failed: {}", e),
            ApiError::NotSuccess {
                status,
                message: Some(m),
            } => write!(f, "HTTP error {}: {}", status, m),
            ApiError::NotSuccess {
                status,
                message: None,
            } => write!(f, "HTTP error {}", status),
            ApiError::Decode(e) => write!(f, "Failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

/// The bookstore backend, as seen by the panels.
///
/// Injected as an `Arc<dyn Api>` so tests can substitute a scripted mock.
#[async_trait]
pub trait Api: Send + Sync {
    async fn register_user(&self, request: RegisterUserRequest) -> Result<(), ApiError>;
    async fn get_book(&self, id: &str) -> Result<Book, ApiError>;
    async fn update_book(&self, id: &str, update: BookUpdate) -> Result<(), ApiError>;
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
}
