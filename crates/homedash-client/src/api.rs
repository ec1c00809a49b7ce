//! HTTP client for the dashboard API.

use homedash_core::app::model::{App, AppUpdate, NewApp};
use homedash_core::envelope::{ApiResponse, Empty};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Default server URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5005";

/// Typed wrapper over the `/api/apps` endpoints.
///
/// Requests carry no timeout; a hung server leaves the caller waiting.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "ApiClient initialized");
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The push channel endpoint on the same server.
    pub fn ws_url(&self) -> String {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .map(|rest| format!("wss://{}", rest))
            .or_else(|| {
                self.base_url
                    .strip_prefix("http://")
                    .map(|rest| format!("ws://{}", rest))
            })
            .unwrap_or_else(|| self.base_url.clone());
        format!("{}/ws", rest)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// GET /api/apps
    pub async fn get_apps(&self) -> ClientResult<Vec<App>> {
        let response = self.client.get(self.url("/apps")).send().await?;
        read_envelope(response).await
    }

    /// POST /api/apps
    pub async fn create_app(&self, input: &NewApp) -> ClientResult<App> {
        let response = self
            .client
            .post(self.url("/apps"))
            .json(input)
            .send()
            .await?;
        read_envelope(response).await
    }

    /// PUT /api/apps/{id}
    pub async fn update_app(&self, id: i64, update: &AppUpdate) -> ClientResult<App> {
        let response = self
            .client
            .put(self.url(&format!("/apps/{}", id)))
            .json(update)
            .send()
            .await?;
        read_envelope(response).await
    }

    /// PUT /api/apps/{id} with only `isPinned`.
    pub async fn set_pinned(&self, id: i64, is_pinned: bool) -> ClientResult<App> {
        self.update_app(id, &AppUpdate::pinned(is_pinned)).await
    }

    /// DELETE /api/apps/{id}
    pub async fn delete_app(&self, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/apps/{}", id)))
            .send()
            .await?;
        let _: Empty = read_envelope(response).await?;
        Ok(())
    }
}

async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        // An unreadable error body is reported the same as an empty one.
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_error_body(status.as_u16(), &body));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice::<ApiResponse<T>>(&bytes)
        .map(ApiResponse::into_inner)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://localhost:5005/");
        assert_eq!(api.base_url(), "http://localhost:5005");
        assert_eq!(api.url("/apps"), "http://localhost:5005/api/apps");
    }

    #[test]
    fn test_ws_url() {
        assert_eq!(
            ApiClient::new("http://localhost:5005").ws_url(),
            "ws://localhost:5005/ws"
        );
        assert_eq!(
            ApiClient::new("https://dash.example.com").ws_url(),
            "wss://dash.example.com/ws"
        );
    }
}
