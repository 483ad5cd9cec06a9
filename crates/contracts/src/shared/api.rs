//! Конверт ответа PHP-бэкенда и разбор HTTP-обмена.
//!
//! Every backend call goes through [`parse_api_response`], so the browser
//! client and the backend integration tests see the same error taxonomy.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_sales_order::SalesOrder;
use crate::shared::pipeline::FilterOptions;

/// Same-origin prefix served by the proxy.
pub const API_BASE: &str = "/api";

/// Longest slice of a non-JSON body kept in the error message.
pub const SNIPPET_LIMIT: usize = 500;

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    GetSoRecords,
    AddSo,
    GetDashboardData,
}

impl ApiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiAction::GetSoRecords => "get_so_records",
            ApiAction::AddSo => "add_so",
            ApiAction::GetDashboardData => "get_dashboard_data",
        }
    }

    /// `/api?action=...`
    pub fn url(&self) -> String {
        format!("{}?action={}", API_BASE, self.as_str())
    }

    /// Message shown when the backend says `success:false` without an `error`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiAction::GetSoRecords => "Failed to fetch SO records.",
            ApiAction::AddSo => "An unknown error occurred.",
            ApiAction::GetDashboardData => "Failed to fetch data",
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error! status: {status}, body: {body}")]
    Http { status: u16, body: String },

    #[error("Expected JSON, but got {content_type}. Response body: {snippet}...")]
    NotJson {
        content_type: String,
        snippet: String,
    },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    pub fn not_json(content_type: Option<&str>, body: &str) -> Self {
        ApiError::NotJson {
            content_type: content_type.unwrap_or("unknown content type").to_string(),
            snippet: body.chars().take(SNIPPET_LIMIT).collect(),
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// `{ success, data?, error? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// `success:false` becomes [`ApiError::Backend`] with the backend's
    /// message, or `fallback` when it sent none.
    pub fn into_result(self, fallback: &str) -> Result<Option<T>, ApiError> {
        if self.success {
            return Ok(self.data);
        }
        let message = self
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Backend(message))
    }

    /// Like [`Self::into_result`], but a successful reply must carry `data`.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        self.into_result(fallback)?
            .ok_or_else(|| ApiError::Malformed("response has no data".to_string()))
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Raw HTTP exchange -> envelope.
///
/// Non-2xx is a transport-class failure; a non-JSON body or a body that does
/// not decode is a malformed response. `success:false` is left to the caller.
pub fn parse_envelope<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            body: body.to_string(),
        });
    }
    if !is_json(content_type) {
        return Err(ApiError::not_json(content_type, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Raw HTTP exchange -> payload, applying the full error taxonomy.
pub fn parse_api_response<T: DeserializeOwned>(
    status: u16,
    content_type: Option<&str>,
    body: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    parse_envelope::<T>(status, content_type, body)?.into_data(fallback)
}

/// Same as [`parse_api_response`] for mutations whose reply carries no data.
pub fn parse_api_ack(
    status: u16,
    content_type: Option<&str>,
    body: &str,
    fallback: &str,
) -> Result<(), ApiError> {
    parse_envelope::<serde_json::Value>(status, content_type, body)?
        .into_result(fallback)
        .map(|_| ())
}

// ============================================================================
// get_so_records payload
// ============================================================================

/// Both shapes the backend has been seen to return for `get_so_records`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SoRecordsPayload {
    Rich {
        records: Vec<SalesOrder>,
        #[serde(default)]
        options: Option<FilterOptions>,
    },
    Flat(Vec<SalesOrder>),
}

/// Canonical `{records, options}` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoRecords {
    pub records: Vec<SalesOrder>,
    pub options: FilterOptions,
}

impl SoRecordsPayload {
    /// Missing option lists are derived from the records.
    pub fn normalize(self) -> SoRecords {
        let (records, options) = match self {
            SoRecordsPayload::Rich { records, options } => (records, options.unwrap_or_default()),
            SoRecordsPayload::Flat(records) => (records, FilterOptions::default()),
        };
        let options = options.or_derive_from(&records);
        SoRecords { records, options }
    }
}

impl From<SoRecordsPayload> for SoRecords {
    fn from(payload: SoRecordsPayload) -> Self {
        payload.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_action_urls() {
        assert_eq!(ApiAction::GetSoRecords.url(), "/api?action=get_so_records");
        assert_eq!(ApiAction::AddSo.url(), "/api?action=add_so");
        assert_eq!(
            ApiAction::GetDashboardData.url(),
            "/api?action=get_dashboard_data"
        );
    }

    #[test]
    fn test_non_2xx_is_http_error() {
        let err = parse_api_response::<Vec<u32>>(502, JSON, "bad gateway", "x").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                body: "bad gateway".into()
            }
        );
        assert_eq!(err.to_string(), "HTTP error! status: 502, body: bad gateway");
    }

    #[test]
    fn test_html_body_is_not_json_with_capped_snippet() {
        let body = "<".repeat(800);
        let err = parse_api_response::<Vec<u32>>(200, Some("text/html"), &body, "x").unwrap_err();
        match err {
            ApiError::NotJson {
                content_type,
                snippet,
            } => {
                assert_eq!(content_type, "text/html");
                assert_eq!(snippet.chars().count(), SNIPPET_LIMIT);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_api_response::<Vec<u32>>(200, None, "{}", "x").unwrap_err();
        assert!(matches!(err, ApiError::NotJson { .. }));
    }

    #[test]
    fn test_success_false_uses_backend_message_or_fallback() {
        let err = parse_api_response::<Vec<u32>>(
            200,
            JSON,
            r#"{"success":false,"error":"DB down"}"#,
            "Failed to fetch SO records.",
        )
        .unwrap_err();
        assert_eq!(err, ApiError::Backend("DB down".into()));

        let err =
            parse_api_response::<Vec<u32>>(200, JSON, r#"{"success":false}"#, "Failed to fetch data")
                .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data");
    }

    #[test]
    fn test_invalid_json_and_missing_data_are_malformed() {
        let err = parse_api_response::<Vec<u32>>(200, JSON, "{not json", "x").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let err = parse_api_response::<Vec<u32>>(200, JSON, r#"{"success":true}"#, "x").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_ack_ignores_data() {
        assert_eq!(
            parse_api_ack(200, JSON, r#"{"success":true,"message":"ok"}"#, "x"),
            Ok(())
        );
        assert_eq!(
            parse_api_ack(200, JSON, r#"{"success":false,"error":"dup"}"#, "x"),
            Err(ApiError::Backend("dup".into()))
        );
    }

    #[test]
    fn test_flat_payload_derives_options() {
        let body = r#"{"success":true,"data":[
            {"id":"1","client":"A","salesman":"X","date_so_approved":"2023-05-01","total_price":"1,200.50","status":"Delivered"},
            {"id":2,"client":"B","salesman":"X","date_so_approved":"2024-01-09","total_price":null}
        ]}"#;
        let payload: SoRecordsPayload = parse_api_response(200, JSON, body, "x").unwrap();
        let normalized = payload.normalize();
        assert_eq!(normalized.records.len(), 2);
        assert_eq!(normalized.records[0].total_price, Some(1200.5));
        assert_eq!(normalized.records[1].total_price, None);
        assert_eq!(normalized.options.clients, vec!["A", "B"]);
        assert_eq!(normalized.options.years, vec!["2024", "2023"]);
    }

    #[test]
    fn test_rich_payload_keeps_backend_options() {
        let body = r#"{"success":true,"data":{
            "records":[{"id":1,"client":"A","salesman":"X","date_so_approved":"2024-03-01"}],
            "options":{"clients":["A","Z"],"salesmen":["X"],"years":[2024,2022]}
        }}"#;
        let payload: SoRecordsPayload = parse_api_response(200, JSON, body, "x").unwrap();
        let normalized = SoRecords::from(payload);
        assert_eq!(normalized.options.clients, vec!["A", "Z"]);
        assert_eq!(normalized.options.years, vec!["2024", "2022"]);
    }
}
