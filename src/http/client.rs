//! Reporting API client

use crate::error::{Error, Result};
use crate::fetch::{FetchResponse, Fetcher};
use crate::types::{JsonValue, ValueMap};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP adapter for one reporting endpoint
#[derive(Debug, Clone)]
pub struct ReportClient {
    client: Client,
    url: Url,
    headers: HashMap<String, String>,
    page_token_param: String,
    elements_path: String,
    next_token_path: String,
}

impl ReportClient {
    /// Start building a client for the given base URL
    pub fn builder(base_url: impl Into<String>) -> ReportClientBuilder {
        ReportClientBuilder::new(base_url)
    }

    fn stringify(value: &JsonValue) -> String {
        match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[async_trait]
impl Fetcher for ReportClient {
    async fn fetch(&self, params: &ValueMap, page_token: Option<&str>) -> Result<FetchResponse> {
        let mut url = self.url.clone();
        {
            let mut query = url.query_pairs_mut();
            // Deterministic parameter order keeps requests reproducible
            let mut keys: Vec<&String> = params.keys().collect();
            keys.sort();
            for key in keys {
                query.append_pair(key, &Self::stringify(&params[key]));
            }
            if let Some(token) = page_token {
                query.append_pair(&self.page_token_param, token);
            }
        }

        debug!(url = %url, "fetching page");

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_seconds = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(Error::RateLimited {
                retry_after_seconds,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body: JsonValue = response.json().await?;

        let elements = match extract_json_path(&body, &self.elements_path) {
            Some(JsonValue::Array(items)) => items,
            Some(other) => {
                return Err(Error::RecordExtraction {
                    path: self.elements_path.clone(),
                    message: format!("expected an array, got {other}"),
                })
            }
            None => {
                return Err(Error::RecordExtraction {
                    path: self.elements_path.clone(),
                    message: "path not found in response".to_string(),
                })
            }
        };

        let next_page_token = extract_json_path(&body, &self.next_token_path)
            .and_then(|v| v.as_str().map(ToString::to_string))
            .filter(|token| !token.is_empty());

        Ok(FetchResponse {
            elements,
            next_page_token,
        })
    }
}

/// Builder for [`ReportClient`]
#[derive(Debug, Clone)]
pub struct ReportClientBuilder {
    base_url: String,
    path: String,
    headers: HashMap<String, String>,
    page_token_param: String,
    elements_path: String,
    next_token_path: String,
    timeout: Duration,
}

impl ReportClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: String::new(),
            headers: HashMap::new(),
            page_token_param: "pageToken".to_string(),
            elements_path: "elements".to_string(),
            next_token_path: "metadata.nextPageToken".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the endpoint path appended to the base URL
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a bearer token Authorization header
    #[must_use]
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("Authorization", value)
    }

    /// Query parameter name carrying the page token
    #[must_use]
    pub fn page_token_param(mut self, name: impl Into<String>) -> Self {
        self.page_token_param = name.into();
        self
    }

    /// Dotted path to the records array in the response body
    #[must_use]
    pub fn elements_path(mut self, path: impl Into<String>) -> Self {
        self.elements_path = path.into();
        self
    }

    /// Dotted path to the next-page token in the response body
    #[must_use]
    pub fn next_token_path(mut self, path: impl Into<String>) -> Self {
        self.next_token_path = path.into();
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ReportClient> {
        let base = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            if self.path.is_empty() {
                String::new()
            } else {
                format!("/{}", self.path.trim_start_matches('/'))
            }
        );
        let url = Url::parse(&base)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()?;

        Ok(ReportClient {
            client,
            url,
            headers: self.headers,
            page_token_param: self.page_token_param,
            elements_path: self.elements_path,
            next_token_path: self.next_token_path,
        })
    }
}

/// Extract a value from JSON using a simple dotted path (e.g. "metadata.nextPageToken")
pub fn extract_json_path(value: &JsonValue, path: &str) -> Option<JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    Some(current.clone())
}
