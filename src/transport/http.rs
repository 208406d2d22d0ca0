//! reqwest-backed GraphQL transport.

use super::GraphQlTransport;
use crate::error::TransportError;
use crate::repo::DEFAULT_HOST;
use crate::scope::GraphQlQuery;
use crate::types::Variables;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("ghproj/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    pub token: Option<String>,
    /// Fixed endpoint; when unset the endpoint is derived from the host.
    pub api_url: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Variables,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// GraphQL transport over HTTPS.
pub struct HttpTransport {
    client: Client,
    token: Option<String>,
    api_url: Option<String>,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                TransportError::Connection(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            token: config.token,
            api_url: config.api_url,
        })
    }

    /// GraphQL endpoint for `host`.
    pub fn endpoint(&self, host: &str) -> String {
        if let Some(url) = &self.api_url {
            return url.clone();
        }
        if host.eq_ignore_ascii_case(DEFAULT_HOST) {
            "https://api.github.com/graphql".to_string()
        } else {
            format!("https://{}/api/graphql", host)
        }
    }
}

fn map_http_error(host: &str, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connection(format!("{}: {}", host, error))
    } else {
        TransportError::Connection(format!("HTTP error: {}", error))
    }
}

/// GitHub answers both missing scopes and secondary rate limits with 403.
fn mentions_rate_limit(body: &str) -> bool {
    body.to_ascii_lowercase().contains("rate limit")
}

fn map_status(host: &str, status: StatusCode, body: String) -> TransportError {
    match status.as_u16() {
        401 => TransportError::Unauthorized {
            host: host.to_string(),
            message: body,
        },
        403 if !mentions_rate_limit(&body) => TransportError::Forbidden {
            host: host.to_string(),
            message: body,
        },
        403 | 429 => TransportError::RateLimited(body),
        code => TransportError::Status {
            host: host.to_string(),
            status: code,
            message: body,
        },
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn query(
        &self,
        host: &str,
        query: &GraphQlQuery,
        variables: &Variables,
    ) -> Result<Value, TransportError> {
        let url = self.endpoint(host);
        debug!(query = query.name, url = %url, "Sending GraphQL query");

        let body = GraphQlRequest {
            query: query.document,
            variables,
            operation_name: query.name,
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| map_http_error(host, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(host, status, text));
        }

        let payload: GraphQlResponse = response.json().await.map_err(|e| TransportError::Decode {
            query: query.name.to_string(),
            message: e.to_string(),
        })?;

        if !payload.errors.is_empty() {
            return Err(TransportError::Query {
                query: query.name.to_string(),
                messages: payload.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        payload.data.ok_or_else(|| TransportError::Decode {
            query: query.name.to_string(),
            message: "response has no data".to_string(),
        })
    }
}
