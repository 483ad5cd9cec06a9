use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::Method;
use thiserror::Error;

use crate::shared::config::UpstreamConfig;

/// Ошибки обращения к PHP-бэкенду
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Upstream request failed: {0}")]
    Unreachable(String),

    #[error("Failed to read upstream response: {0}")]
    Unreadable(String),
}

/// Запрос, пересылаемый бэкенду как есть
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Bytes,
    pub request_id: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Трейт для бэкенда, которому прокси отдаёт запросы
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}

/// `base` + `?query`, keeping any query the base URL already has.
pub fn target_url(base: &str, query: Option<&str>) -> String {
    match query.map(|q| q.trim_start_matches('?')).filter(|q| !q.is_empty()) {
        None => base.to_string(),
        Some(q) if base.contains('?') => format!("{}&{}", base.trim_end_matches('&'), q),
        Some(q) => format!("{}?{}", base, q),
    }
}

/// Value of `action` in a query string, percent-decoded.
pub fn action_of(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "action")
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Клиент PHP-бэкенда поверх reqwest
pub struct HttpUpstream {
    client: reqwest::Client,
    url: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let url = target_url(&self.url, request.query.as_deref());
        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header("x-request-id", &request.request_id);
        if let Some(content_type) = &request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(accept) = &request.accept {
            builder = builder.header(reqwest::header::ACCEPT, accept);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Unreadable(e.to_string()))?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
