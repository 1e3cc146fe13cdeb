use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::types::*;
use super::IconApi;
use crate::errors::StreamlineError;

pub const DEFAULT_BASE_URL: &str = "https://public-api.streamlinehq.com/v1";

const API_KEY_HEADER: &str = "x-api-key";
const ACCEPT_JSON: &str = "application/json";
const ACCEPT_SVG: &str = "image/svg+xml";
const ACCEPT_PNG: &str = "image/png";

/// HTTP client for the icon service.
///
/// No request timeout is configured: a connection that never answers blocks
/// the calling command until the process is stopped.
pub struct StreamlineClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl std::fmt::Debug for StreamlineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamlineClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl StreamlineClient {
    /// Fails with `MissingCredential` when no usable key is supplied.
    pub fn new(api_key: Option<String>) -> Result<Self, StreamlineError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(StreamlineError::MissingCredential)?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            client: Client::new(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET and return the full body of a 200 response.
    async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
        accept: &str,
    ) -> Result<Vec<u8>, StreamlineError> {
        let url = self.url(path);
        log::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, accept)
            .query(params)
            .send()
            .await
            .map_err(|e| StreamlineError::TransportFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| StreamlineError::TransportFailure(e.to_string()))?;

        if status != StatusCode::OK {
            log::debug!("GET {} returned {}", url, status);
            return Err(classify_failure(status, &body));
        }

        Ok(body.to_vec())
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, StreamlineError> {
        let body = self.fetch(path, params, ACCEPT_JSON).await?;
        serde_json::from_slice(&body).map_err(|e| StreamlineError::DecodeFailure(e.to_string()))
    }
}

/// Turn a non-200 response into `RemoteRequestFailed`.
///
/// A body carrying `message` or `error` contributes them; any other body only
/// shows up in the message verbatim. The raw body is always kept.
pub(crate) fn classify_failure(status: StatusCode, body: &[u8]) -> StreamlineError {
    let raw = String::from_utf8_lossy(body).to_string();
    let structured = serde_json::from_slice::<RemoteErrorBody>(body)
        .ok()
        .filter(|remote| remote.message.is_some() || remote.error.is_some());

    match structured {
        Some(remote) => StreamlineError::RemoteRequestFailed {
            status: status.as_u16(),
            message: remote
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "API request failed".to_string()),
            error_code: remote.error,
            body: Some(raw),
        },
        None => StreamlineError::RemoteRequestFailed {
            status: status.as_u16(),
            message: format!("API request failed with status {}: {}", status.as_u16(), raw),
            error_code: None,
            body: Some(raw),
        },
    }
}

fn require_segment<'a>(value: &'a str, what: &str) -> Result<&'a str, StreamlineError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StreamlineError::InvalidOptions(format!("{} must not be empty", what)));
    }
    Ok(value)
}

#[async_trait]
impl IconApi for StreamlineClient {
    async fn global_search(&self, options: &SearchOptions) -> Result<SearchResponse, StreamlineError> {
        options.validate()?;
        if options.query.as_deref().map_or(true, |q| q.trim().is_empty()) {
            return Err(StreamlineError::InvalidOptions(
                "global search needs a query".to_string(),
            ));
        }
        self.fetch_json("/search/global", &options.query_params()).await
    }

    async fn family_search(
        &self,
        family_slug: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, StreamlineError> {
        options.validate()?;
        let slug = require_segment(family_slug, "family slug")?;
        let path = format!("/search/family/{}", urlencoding::encode(slug));
        self.fetch_json(&path, &options.query_params()).await
    }

    async fn get_icon(&self, hash: &str) -> Result<IconDetail, StreamlineError> {
        let hash = require_segment(hash, "icon hash")?;
        let path = format!("/icons/{}", urlencoding::encode(hash));
        self.fetch_json(&path, &[]).await
    }

    async fn download_svg(&self, hash: &str, options: &SvgOptions) -> Result<Vec<u8>, StreamlineError> {
        let hash = require_segment(hash, "icon hash")?;
        let path = format!("/icons/{}/download/svg", urlencoding::encode(hash));
        let mut params = Vec::new();
        if options.responsive {
            params.push(("responsive", "true".to_string()));
        }
        self.fetch(&path, &params, ACCEPT_SVG).await
    }

    async fn download_png(&self, hash: &str, options: &PngOptions) -> Result<Vec<u8>, StreamlineError> {
        let hash = require_segment(hash, "icon hash")?;
        let path = format!("/icons/{}/download/png", urlencoding::encode(hash));
        let params = vec![("size", options.effective_size().to_string())];
        self.fetch(&path, &params, ACCEPT_PNG).await
    }
}
