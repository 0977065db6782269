use crate::config::Config;
use dioxus::prelude::{info, warn};
use reqwest::{Client, Response, StatusCode};
use shared_http::api::{
    ApiErrorBody, CreateTodoRequest, HealthResponse, TodoResponse, UpdateTodoRequest,
};
use std::fmt;

pub const GENERIC_ERROR: &str = "Something went wrong";

/// A failed API call, reduced to the text shown in the error banner
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientError {
    pub message: String,
}

impl ApiClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// First validation message, else the server's error text, else a
    /// generic message naming the status
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message().map(str::to_string))
            .map(Self::new)
            .unwrap_or_else(|| Self::new(format!("{} (status {})", GENERIC_ERROR, status.as_u16())))
    }
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        warn!("Request failed: {}", err);
        Self::new(err.to_string())
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Config::from_env(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiClientError::from_response_body(status, &body);
        warn!("API returned {}: {}", status, error);
        Err(error)
    }
}

impl ApiClient {
    pub async fn check_health(&self) -> Result<HealthResponse, ApiClientError> {
        let url = self.url("/health");
        info!("Checking health at URL: {}", url);
        let response = Self::ensure_success(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn list_todos(&self) -> Result<Vec<TodoResponse>, ApiClientError> {
        let response = self.client.get(self.url("/todos")).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create_todo(
        &self,
        request: &CreateTodoRequest,
    ) -> Result<TodoResponse, ApiClientError> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    pub async fn update_todo(
        &self,
        id: &str,
        request: &UpdateTodoRequest,
    ) -> Result<TodoResponse, ApiClientError> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{}", id)))
            .json(request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{}", id)))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
