//! HTTP client for the Paperless REST API
//!
//! Provides a thin wrapper over `reqwest` that handles:
//! - URL construction under the `/api` root
//! - Default headers (API version, language, auth)
//! - Status checking with structured error logging
//! - Response body parsing
//!
//! There is no retry or rate limiting: every call maps to
//! exactly one HTTP request.

use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Server root, e.g. `http://localhost:8000`
    pub base_url: Option<String>,
    /// Path prefix of the REST API under the server root
    pub api_prefix: String,
    /// Value of the `version` parameter in the `Accept` header
    pub api_version: u32,
    /// `Accept-Language` header value
    pub accept_language: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_prefix: "/api".to_string(),
            api_version: 5,
            accept_language: "en-US,en;q=0.9".to_string(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("paperless-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the API path prefix
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.api_prefix = prefix.into();
        self
    }

    /// Set the API version requested in the `Accept` header
    pub fn api_version(mut self, version: u32) -> Self {
        self.config.api_version = version;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client bound to one Paperless server
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a new HTTP client without credentials
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Self::with_auth(config, AuthConfig::None)
    }

    /// Create a client with authentication
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::new(auth_config),
        })
    }

    /// The client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path, RequestConfig::default())
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> Result<Response> {
        self.request(Method::POST, path, RequestConfig::default().json(body))
            .await
    }

    /// Make a generic request
    ///
    /// Any non-2xx status is turned into [`Error::RequestFailed`] after the
    /// failure has been logged with its URL, method, status and body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.url_for(path);
        let has_body = config.body.is_some();
        let req = self.build_request(method.clone(), &full_url, &config);
        self.execute(req, &method, &full_url, has_body).await
    }

    /// POST a multipart form
    pub async fn send_multipart(&self, path: &str, form: Form) -> Result<Response> {
        let full_url = self.url_for(path);
        let req = self
            .build_request(Method::POST, &full_url, &RequestConfig::default())
            .multipart(form);
        self.execute(req, &Method::POST, &full_url, true).await
    }

    /// Make a request and parse JSON response
    ///
    /// Empty bodies (e.g. `204 No Content`) are decoded as JSON `null`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(method, path, config).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Make a GET request and parse JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_json(Method::GET, path, RequestConfig::default())
            .await
    }

    /// Make a GET request with config and parse JSON response
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request_json(Method::GET, path, config).await
    }

    /// Make a GET request and return the raw body
    pub async fn get_bytes(&self, path: &str, config: RequestConfig) -> Result<Bytes> {
        let response = self.request(Method::GET, path, config).await?;
        Ok(response.bytes().await?)
    }

    /// Build the full URL for an API path
    ///
    /// Absolute URLs are passed through untouched; anything else is placed
    /// under `<base_url><api_prefix>`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let prefix = self.config.api_prefix.trim_end_matches('/');
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                format!("{base}{prefix}{path}")
            }
            None => format!("{prefix}{path}"),
        }
    }

    /// `Accept` header value carrying the API version
    fn accept_header(&self) -> String {
        format!("application/json; version={}", self.config.api_version)
    }

    fn build_request(&self, method: Method, url: &str, config: &RequestConfig) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, url)
            .header(ACCEPT, self.accept_header())
            .header(ACCEPT_LANGUAGE, self.config.accept_language.as_str());

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add request-specific headers
        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        if let Some(timeout) = config.timeout {
            req = req.timeout(timeout);
        }

        self.authenticator.apply(req)
    }

    async fn execute(
        &self,
        req: RequestBuilder,
        method: &Method,
        full_url: &str,
        has_body: bool,
    ) -> Result<Response> {
        debug!("{} {}", method, full_url);
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = read_error_body(response).await;
            error!(
                url = %full_url,
                method = %method,
                has_body,
                status = status.as_u16(),
                response = ?body,
                "Error executing request"
            );
            return Err(Error::request_failed(status.as_u16(), body));
        }

        debug!("Request succeeded: {} {} ({})", method, full_url, status.as_u16());
        Ok(response)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", self.authenticator.config())
            .finish_non_exhaustive()
    }
}

/// Decode an error body as JSON, if possible
async fn read_error_body(response: Response) -> Option<Value> {
    let bytes = response.bytes().await.ok()?;
    serde_json::from_slice(&bytes).ok()
}
