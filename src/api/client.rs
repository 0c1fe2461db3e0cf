use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Response;

use super::{Api, ApiError, Book, BookUpdate, ErrorBody, GetBookResult, ListBooksResult, RegisterUserRequest};

#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turns a non-2xx response into an [`ApiError`], keeping the server's
/// `message` attribute when the body carried one.
async fn check_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);
        if message.is_none() {
            tracing::error!("request failed with status {}: {}", status, text);
        }
        return Err(ApiError::NotSuccess {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

fn cover_mime(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl Api for HttpClient {
    async fn register_user(&self, request: RegisterUserRequest) -> Result<(), ApiError> {
        let url = format!("{}/user/register", self.base_url);
        let response = self.http.post(&url).json(&request).send().await?;
        check_success(response).await?;
        Ok(())
    }

    async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let url = format!("{}/books/{}", self.base_url, id);
        let response = self.http.get(&url).send().await?;
        let result: GetBookResult = check_success(response).await?.json().await?;
        Ok(result.data)
    }

    async fn update_book(&self, id: &str, update: BookUpdate) -> Result<(), ApiError> {
        let url = format!("{}/books/{}", self.base_url, id);
        let mut form = multipart::Form::new()
            .text("title", update.title)
            .text("author", update.author)
            .text("publishYear", update.publish_year);
        if let Some(cover) = update.cover {
            let part = multipart::Part::bytes(cover.bytes)
                .mime_str(cover_mime(&cover.file_name))?
                .file_name(cover.file_name);
            form = form.part("coverImage", part);
        }
        let response = self.http.put(&url).multipart(form).send().await?;
        check_success(response).await?;
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/books", self.base_url);
        let response = self.http.get(&url).send().await?;
        let result: ListBooksResult = check_success(response).await?.json().await?;
        Ok(result.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = HttpClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn cover_mime_from_extension() {
        assert_eq!(cover_mime("moby.png"), "image/png");
        assert_eq!(cover_mime("moby.jpeg"), "image/jpeg");
        assert_eq!(cover_mime("moby"), "application/octet-stream");
    }
}
