use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ApiEnvelope;
use thiserror::Error;

use crate::routes::AppState;
use crate::shared::upstream::{action_of, UpstreamError, UpstreamRequest};

/// Ошибка прокси, отдаётся клиенту в формате конверта API
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Upstream(UpstreamError::Client(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let envelope = ApiEnvelope::<()>::failure(self.to_string());
        (self.status(), Json(envelope)).into_response()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// ANY /api
///
/// Forwards method, query string, body, `Content-Type` and `Accept` to the
/// PHP backend and relays its status, `Content-Type` and body unchanged.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let query = uri.query().map(str::to_string);
    let action = action_of(query.as_deref()).unwrap_or_else(|| "-".to_string());

    let request = UpstreamRequest {
        method: method.clone(),
        query,
        content_type: header_value(&headers, header::CONTENT_TYPE),
        accept: header_value(&headers, header::ACCEPT),
        body,
        request_id: request_id.clone(),
    };

    let upstream = match state.upstream.forward(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(%request_id, %method, %action, "upstream failed: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        %request_id,
        %method,
        %action,
        status = upstream.status,
        bytes = upstream.body.len(),
        "upstream responded"
    );

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = status;
    if let Some(value) = upstream
        .content_type
        .and_then(|ct| header::HeaderValue::from_str(&ct).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_renders_envelope() {
        let response =
            ProxyError::from(UpstreamError::Unreachable("connection refused".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Upstream request failed: connection refused");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_client_error_is_internal() {
        let err = ProxyError::from(UpstreamError::Client("tls".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
