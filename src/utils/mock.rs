use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiError, Book, BookUpdate, RegisterUserRequest};
use crate::notify::{Notification, Notifier};

/// Scripted mock backend. Each entry is an optional expected request body
/// (asserted in order when present) and the response to return.
pub struct Api {
    script: Mutex<VecDeque<(Option<Value>, Result<Value, ApiError>)>>,
}

impl Api {
    pub fn new(script: Vec<(Option<Value>, Result<Value, ApiError>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.lock().expect("poisoned mock script").is_empty()
    }

    fn next(&self, request: Value) -> Result<Value, ApiError> {
        let (expected, response) = self
            .script
            .lock()
            .expect("poisoned mock script")
            .pop_front()
            .expect("Mock API must have all requests scripted in the right order");
        if let Some(expected) = expected {
            assert_eq!(expected, request);
        }
        response
    }
}

#[async_trait]
impl crate::api::Api for Api {
    async fn register_user(&self, request: RegisterUserRequest) -> Result<(), ApiError> {
        self.next(json!({"method": "register_user", "params": request}))?;
        Ok(())
    }

    async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        let value = self.next(json!({"method": "get_book", "params": id}))?;
        Ok(serde_json::from_value(value).expect("mock get_book response must be a book"))
    }

    async fn update_book(&self, id: &str, update: BookUpdate) -> Result<(), ApiError> {
        self.next(json!({"method": "update_book", "params": [id, update]}))?;
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let value = self.next(json!({"method": "list_books", "params": null}))?;
        Ok(serde_json::from_value(value).expect("mock list_books response must be a book list"))
    }
}

/// Notification sink recording every message, in emission order.
#[derive(Debug, Default)]
pub struct Recorder {
    notifications: Mutex<Vec<Notification>>,
}

impl Recorder {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("poisoned recorder")
            .clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("poisoned recorder")
            .push(notification);
    }
}
