//! REST API access.
//!
//! One typed query function per endpoint of the Lost & Found service. Every
//! request goes through [`ApiClient::request`], which attaches the current
//! credential as a bearer token.

mod admin;
mod auth;
mod claims;
mod items;
mod retrievals;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::errors::{ClientError, ClientResult};
use crate::session::SessionContext;

/// HTTP client bound to one API base URL and one session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("lostfound-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http(http, base_url, session))
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionContext,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the credential if one is present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.authorization_header() {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send a request and decode a JSON response body.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status, &body);
            tracing::warn!("{} returned {}: {}", url, status, err.message());
            return Err(err);
        }

        tracing::debug!("{} returned {}", url, status);
        let bytes = response.bytes().await?;
        // Action endpoints may answer with an empty body
        if bytes.iter().all(u8::is_ascii_whitespace) {
            let empty = serde_json::from_str::<T>("null").or_else(|_| serde_json::from_str::<T>("{}"))?;
            return Ok(empty);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Escape a path segment (ids come from the service, but may be typed by hand).
fn segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}
