//! Gateway
//!
//! The request primitives repositories are written against, and the
//! reqwest-backed implementation talking to a real cloud controller.

use super::http::HttpClient;
use crate::errors::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// Request primitives consumed by repositories and the pagination engine
#[async_trait]
pub trait Gateway: Send + Sync {
    /// POST a JSON body to a collection URL
    async fn create_resource(&self, url: &str, body: Value) -> Result<(), ApiError>;

    /// DELETE the resource at `url`
    async fn delete_resource(&self, url: &str) -> Result<(), ApiError>;

    /// GET one page of a collection as raw JSON
    async fn get_page(&self, url: &str) -> Result<Value, ApiError>;
}

/// Gateway backed by [`HttpClient`]
#[derive(Clone)]
pub struct CloudControllerGateway {
    http: HttpClient,
    access_token: Option<String>,
}

impl CloudControllerGateway {
    pub fn new(access_token: Option<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new()?,
            access_token,
        })
    }

    fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

#[async_trait]
impl Gateway for CloudControllerGateway {
    async fn create_resource(&self, url: &str, body: Value) -> Result<(), ApiError> {
        self.http.post(url, self.token(), Some(&body)).await
    }

    async fn delete_resource(&self, url: &str) -> Result<(), ApiError> {
        self.http.delete(url, self.token()).await
    }

    async fn get_page(&self, url: &str) -> Result<Value, ApiError> {
        self.http.get(url, self.token()).await
    }
}
