use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::application::{LnClientError, Result};
use crate::config::Config;

/// A single call against the bark REST API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Fails if the body cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(LnClientError::Encode)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// HTTP transport for the bark daemon.
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    base: String,
    http: Client,
}

impl Transport {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a caller-configured client, e.g. one with a request timeout.
    pub fn with_client(config: &Config, http: Client) -> Self {
        Self {
            base: config.address.as_str().to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Perform one round trip and decode the JSON response into `R`.
    ///
    /// Non-2xx statuses become [`LnClientError::Api`] with the body verbatim.
    /// The response body is read to the end on every path.
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, request.path);

        let mut builder = self.http.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.path, e);
            LnClientError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "{} {} returned status {}: {}",
                request.method,
                request.path,
                status.as_u16(),
                body
            );
            return Err(LnClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(
                "{} {} returned an unexpected body: {}",
                request.method, request.path, e
            );
            LnClientError::Decode(e)
        })
    }
}
