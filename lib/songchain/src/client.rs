use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    AuthStatus, LoginResponse, RelationshipsResponse, SaveRelationshipsRequest, SearchResponse,
    SongRef, Track,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{BackendError, Result};

/// HTTP client for the queue backend. The session rides on a cookie, so
/// every request is sent with credentials included.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    client: Client,
}

#[derive(Default)]
pub struct BackendClientBuilder {
    base_url: Option<String>,
}

impl BackendClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Result<BackendClient> {
        let base_url_str = self.base_url.ok_or(BackendError::NotConfigured)?;
        // Trailing slash so joins append instead of replacing the last segment
        let base_url = Url::parse(&format!("{}/", base_url_str.trim_end_matches('/')))?;

        Ok(BackendClient {
            base_url,
            client: build_http_client(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    // fetch() defaults to same-origin credentials; the backend lives on
    // another origin, so the session cookie has to be opted in.
    Client::builder()
        .fetch_credentials_include()
        .build()
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::new()
}

impl BackendClient {
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("v1/{endpoint}"))?)
    }

    async fn make_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<B>,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        self.request_url(method, url, body).await
    }

    async fn request_url<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<B>,
    ) -> Result<T> {
        debug!("Request: {} {}", method, url);
        let endpoint = url.path().to_string();
        let mut request = self.client.request(method, url);
        if let Some(b) = body {
            request = request.json(&b);
        }
        let response = request.send().await?;
        Self::handle_response(&endpoint, response).await
    }

    async fn handle_response<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            Self::parse_success(endpoint, &text)
        } else {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            Err(BackendError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Validate a 2xx body against the expected schema. A body that does
    /// not match is a malformed response, never a panic downstream.
    fn parse_success<T: DeserializeOwned>(endpoint: &str, text: &str) -> Result<T> {
        let text = if text.trim().is_empty() { "null" } else { text };
        serde_json::from_str(text).map_err(|e| BackendError::MalformedResponse {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        })
    }

    /// Fetch the Spotify authorization URL to hand the browser off to.
    pub async fn login_url(&self) -> Result<String> {
        let response: LoginResponse = self.make_request(Method::GET, "login", None::<()>).await?;
        info!("Received authorization URL");
        Ok(response.auth_url)
    }

    /// Current session state. One call per view mount; callers decide what
    /// a failure means (the guard treats it as logged out).
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        self.make_request(Method::GET, "auth/status", None::<()>)
            .await
    }

    /// Invalidate the backend session. The response body is irrelevant.
    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self
            .make_request(Method::POST, "logout", None::<()>)
            .await?;
        info!("Session invalidated");
        Ok(())
    }

    /// Proxied catalog search. Returns tracks in the order the catalog
    /// ranked them.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>> {
        let mut url = self.endpoint_url("search")?;
        url.query_pairs_mut().append_pair("q", query);

        let response: SearchResponse = self.request_url(Method::GET, url, None::<()>).await?;
        debug!("Search returned {} tracks", response.tracks.items.len());
        Ok(response.tracks.items)
    }

    /// Persist an ordered chain of songs. Array order is the play order.
    pub async fn save_relationships(&self, songs: Vec<Track>) -> Result<HashMap<String, SongRef>> {
        info!("Saving a chain of {} songs", songs.len());
        let body = SaveRelationshipsRequest { songs };
        let response: RelationshipsResponse = self
            .make_request(Method::POST, "songs/relationships", Some(&body))
            .await?;
        Ok(response.relationships)
    }

    /// All chains persisted for the current session's user.
    pub async fn relationships(&self) -> Result<HashMap<String, SongRef>> {
        let response: RelationshipsResponse = self
            .make_request(Method::GET, "songs/relationships", None::<()>)
            .await?;
        Ok(response.relationships)
    }

    pub async fn check_connection(&self) -> bool {
        let healthy = self
            .make_request::<serde_json::Value, ()>(Method::GET, "health", None)
            .await
            .is_ok();
        if !healthy {
            warn!("Backend health check failed");
        }
        healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BackendClient {
        BackendClientBuilder::new().base_url(base).build().unwrap()
    }

    #[test]
    fn builder_requires_a_base_url() {
        assert!(matches!(
            BackendClientBuilder::new().build(),
            Err(BackendError::NotConfigured)
        ));
    }

    #[test]
    fn endpoint_urls_keep_the_base_path() {
        let client = client("http://localhost:8000/api");
        assert_eq!(
            client.endpoint_url("auth/status").unwrap().as_str(),
            "http://localhost:8000/api/v1/auth/status"
        );

        // trailing slash on the configured URL makes no difference
        let client = self::client("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint_url("login").unwrap().as_str(),
            "http://localhost:8000/api/v1/login"
        );
    }

    #[test]
    fn search_query_is_percent_encoded() {
        let client = client("http://localhost:8000/api");
        let mut url = client.endpoint_url("search").unwrap();
        url.query_pairs_mut().append_pair("q", "Imagine & more");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/search?q=Imagine+%26+more"
        );
    }

    #[test]
    fn success_body_failing_the_schema_is_malformed() {
        // login response without auth_url
        let err = BackendClient::parse_success::<LoginResponse>("/api/v1/login", r#"{"ok": true}"#)
            .unwrap_err();
        match err {
            BackendError::MalformedResponse { endpoint, .. } => {
                assert_eq!(endpoint, "/api/v1/login")
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn valid_bodies_parse() {
        let login: LoginResponse = BackendClient::parse_success(
            "/api/v1/login",
            r#"{"auth_url": "https://accounts.spotify.com/authorize?x=1"}"#,
        )
        .unwrap();
        assert!(login.auth_url.starts_with("https://accounts.spotify.com"));

        let status: AuthStatus =
            BackendClient::parse_success("/api/v1/auth/status", r#"{"authenticated": false}"#)
                .unwrap();
        assert!(!status.authenticated);

        // empty success body (logout) parses as null
        let value: serde_json::Value = BackendClient::parse_success("/api/v1/logout", "").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn auth_expiry_is_a_401() {
        let err = BackendError::Api {
            status: 401,
            message: "Not authenticated".into(),
        };
        assert!(err.is_auth_expired());
        let err = BackendError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert!(!err.is_auth_expired());
    }
}
