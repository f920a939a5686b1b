//! HTTP client abstraction for testability

use std::time::Duration;

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request with bearer authentication
    async fn get(&self, url: &str, bearer: &str) -> crate::Result<HttpResponse>;

    /// Send a DELETE request with bearer authentication
    async fn delete(&self, url: &str, bearer: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn with_timeout(timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::MonitorListError::Http(format!("Building client: {}", e)))?;
        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> crate::Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::MonitorListError::Http(format!("Reading response body: {}", e)))?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, bearer: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|e| crate::MonitorListError::Http(format!("GET {} failed: {}", url, e)))?;

        let response = Self::read(response).await?;
        tracing::debug!(
            "GET {} -> {} ({} bytes)",
            url,
            response.status,
            response.body.len()
        );
        Ok(response)
    }

    async fn delete(&self, url: &str, bearer: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(|e| crate::MonitorListError::Http(format!("DELETE {} failed: {}", url, e)))?;

        let response = Self::read(response).await?;
        tracing::debug!("DELETE {} -> {}", url, response.status);
        Ok(response)
    }
}
