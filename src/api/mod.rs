//! REST API Client
//!
//! Typed wrappers over the board backend, organized by domain.
//! One call issues one request: no retries, no extra timeouts.

mod auth;
mod board;
mod card;
mod error;
mod list;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{AppConfig, ConfigError};

pub use error::ApiError;

/// HTTP client bound to the API base URL. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Always ends with '/'
    base: String,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self {
            http: build_http_client(),
            base,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let base = resolve_base(&config.api_base, page_origin().as_deref())?;
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL of an endpoint below the base
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        Ok(response.json().await?)
    }

    /// POST whose response body is ignored
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, path, None::<&()>).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match with_session(request).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{} /{} failed: {}", method, path, e);
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        log::debug!("{} /{} -> {}", method, path, status.as_u16());
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), status.canonical_reason(), &text);
        log::warn!("{} /{}: {}", method, path, err);
        Err(err)
    }
}

/// Resolve the configured base against the page origin when it is a path
pub fn resolve_base(api_base: &str, origin: Option<&str>) -> Result<Url, ConfigError> {
    let api_base = api_base.trim();
    if let Ok(url) = Url::parse(api_base) {
        if url.cannot_be_a_base() {
            return Err(invalid_base(api_base, "not a base URL"));
        }
        return Ok(url);
    }
    if !api_base.starts_with('/') {
        return Err(invalid_base(api_base, "expected an absolute URL or a path starting with '/'"));
    }
    let origin = origin.ok_or_else(|| invalid_base(api_base, "no page origin to resolve against"))?;
    Url::parse(origin)
        .and_then(|origin| origin.join(api_base))
        .map_err(|e| invalid_base(api_base, &e.to_string()))
}

fn invalid_base(api_base: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: "api_base",
        message: format!("'{}': {}", api_base, reason),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

// Session travels in a cookie, so every request must carry credentials
#[cfg(target_arch = "wasm32")]
fn with_session(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_session(request: RequestBuilder) -> RequestBuilder {
    request
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_default()
}
