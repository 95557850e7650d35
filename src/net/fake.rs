//! In-memory gateway for unit tests

use super::gateway::Gateway;
use crate::errors::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned pages by URL and records every request it sees
#[derive(Default)]
pub struct FakeGateway {
    pages: HashMap<String, Value>,
    page_errors: Mutex<HashMap<String, ApiError>>,
    write_error: Mutex<Option<ApiError>>,
    requests: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: Value) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    /// Fail the first request for `url` with `error`
    pub fn with_page_error(self, url: &str, error: ApiError) -> Self {
        self.page_errors
            .lock()
            .unwrap()
            .insert(url.to_string(), error);
        self
    }

    /// Fail the next create or delete with `error`
    pub fn with_write_error(self, error: ApiError) -> Self {
        *self.write_error.lock().unwrap() = Some(error);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    fn take_write_error(&self) -> Result<(), ApiError> {
        match self.write_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn create_resource(&self, url: &str, body: Value) -> Result<(), ApiError> {
        self.record(format!("POST {}", url));
        self.bodies.lock().unwrap().push(body);
        self.take_write_error()
    }

    async fn delete_resource(&self, url: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE {}", url));
        self.take_write_error()
    }

    async fn get_page(&self, url: &str) -> Result<Value, ApiError> {
        self.record(format!("GET {}", url));

        if let Some(err) = self.page_errors.lock().unwrap().remove(url) {
            return Err(err);
        }

        self.pages.get(url).cloned().ok_or_else(|| ApiError::Http {
            status: 404,
            code: None,
            error_code: None,
            description: Some(format!("no page at {}", url)),
        })
    }
}
