//! The single seam between the SDK and the network.
//!
//! Everything above this module talks to a [`RemoteApi`]: one request in,
//! one decoded envelope payload (or typed error) out. [`HttpRemote`] is the
//! production implementation; tests substitute a recording mock.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde_json::Value;
use sportstalk_protocol::{ApiError, ApiRequest, Endpoint, HttpMethod, parse_envelope};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Performs one SportsTalk call.
///
/// Implementations make exactly one round trip per call and never retry.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn call(&self, request: ApiRequest) -> Result<Value>;
}

#[async_trait]
impl<T: RemoteApi + ?Sized> RemoteApi for Arc<T> {
    async fn call(&self, request: ApiRequest) -> Result<Value> {
        (**self).call(request).await
    }
}

/// `reqwest`-backed [`RemoteApi`].
#[derive(Debug, Clone)]
pub struct HttpRemote {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpRemote {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let mut token = HeaderValue::from_str(&config.api_token)
            .map_err(|_| Error::Config("API token contains invalid characters".to_string()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-api-token", token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("endpoint cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }
}

#[async_trait]
impl RemoteApi for HttpRemote {
    async fn call(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request.endpoint)?;
        let method = match request.method() {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        debug!(method = %method, path = %request.endpoint.path(), "SportsTalk request");

        let mut builder = self.http.request(method, url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_response(status, &body).inspect_err(|e| {
            warn!(
                status = status,
                path = %request.endpoint.path(),
                error = %e,
                "SportsTalk call failed"
            );
        })
    }
}

/// Turn a raw status and body into the envelope payload or a typed error.
///
/// Error statuses whose body is not an envelope still come back as
/// [`Error::Remote`], carrying the HTTP status as the code.
pub fn decode_response(status: u16, body: &str) -> Result<Value> {
    match parse_envelope(status, body) {
        Ok(response) => response.into_result().map_err(Error::Remote),
        Err(_) if !(200..300).contains(&status) => {
            Err(Error::Remote(ApiError::unstructured(status, body)))
        }
        Err(e) => Err(e.into()),
    }
}
