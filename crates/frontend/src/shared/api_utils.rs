//! API utilities for frontend-backend communication
//!
//! Every call goes through the proxy and is decoded with the shared
//! envelope rules from `contracts::shared::api`.

use contracts::shared::api::{parse_api_ack, parse_api_response, ApiAction, ApiError};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// The proxy listens on port 3000 of the host that served the page, so the
/// app works both from the proxy's own static server and from `trunk serve`.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL of an action, e.g. `http://host:3000/api?action=get_so_records`
pub fn api_url(action: ApiAction) -> String {
    format!("{}{}", api_base(), action.url())
}

/// Status, content type and body text of a finished exchange.
async fn read_response(response: Response) -> Result<(u16, Option<String>, String), ApiError> {
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, content_type, body))
}

/// GET `action` and decode its `data`.
pub async fn get_action<T: DeserializeOwned>(action: ApiAction) -> Result<T, ApiError> {
    let url = api_url(action);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let (status, content_type, body) = read_response(response).await?;

    parse_api_response(status, content_type.as_deref(), &body, action.fallback_message())
        .inspect_err(|e| log::error!("{} failed: {}", action.as_str(), e))
}

/// POST a JSON body to `action`; success carries no data.
pub async fn post_action<B: Serialize>(action: ApiAction, body: &B) -> Result<(), ApiError> {
    let url = api_url(action);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let (status, content_type, body) = read_response(response).await?;

    parse_api_ack(status, content_type.as_deref(), &body, action.fallback_message())
        .inspect_err(|e| log::error!("{} failed: {}", action.as_str(), e))
}
