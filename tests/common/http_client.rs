//! HTTP client helpers for tests.

use quizgen::gateway::QuestionsResponse;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: serde_json::Value,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Posts to `/v1/questions`; returns the body and the `X-Quizgen-Status` header.
    pub async fn questions(
        &self,
        body: serde_json::Value,
    ) -> Result<(QuestionsResponse, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/questions"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status_header = resp
            .headers()
            .get("x-quizgen-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 | 422 => Err(TestClientError::BadRequest(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}
