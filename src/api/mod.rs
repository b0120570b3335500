//! REST API Client
//!
//! Thin fetch wrapper against the habit API, organized by domain.
//! Attaches the bearer token from the session store on authenticated calls.

mod auth;
mod habits;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::session;

// Re-export all public items
pub use auth::*;
pub use habits::*;

/// Base URL of the habit API
pub const API_BASE: &str = "http://localhost:8000/api";

/// Client-side view of a failed API call
///
/// All errors are handled at the component that issued the call; nothing
/// is retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server rejected the request; holds the first reported field message
    #[error("{0}")]
    Validation(String),
    /// HTTP 401 - the session token is missing or no longer valid
    #[error("authentication required")]
    Unauthorized,
    /// HTTP 404
    #[error("not found")]
    NotFound,
    /// Transport failure or a response the client could not read
    #[error("unexpected error")]
    Network,
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Issue one request; non-2xx statuses come back as `ApiError`
async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
    auth: bool,
) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let headers = Headers::new().map_err(|_| ApiError::Network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Network)?;
    if auth {
        if let Some(token) = session::get_token() {
            headers
                .set("Authorization", &format!("Token {}", token))
                .map_err(|_| ApiError::Network)?;
        }
    }
    opts.set_headers(headers.as_ref());

    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let url = format!("{}{}", API_BASE, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|_| ApiError::Network)?;
    let window = web_sys::window().ok_or(ApiError::Network)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            log::error!("{} {} failed: {}", method, path, js_error_message(&e));
            ApiError::Network
        })?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Network)?;

    if response.ok() {
        Ok(response)
    } else {
        Err(error_from_response(&response).await)
    }
}

async fn error_from_response(response: &Response) -> ApiError {
    match response.status() {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        _ => {
            let body = match response.json() {
                Ok(promise) => JsFuture::from(promise).await.ok(),
                Err(_) => None,
            };
            body.and_then(|value| serde_wasm_bindgen::from_value::<serde_json::Value>(value).ok())
                .and_then(|value| first_field_error(&value))
                .map(ApiError::Validation)
                .unwrap_or(ApiError::Network)
        }
    }
}

/// Pull the first message of the first field out of an error body
///
/// Handles both `{field: ["msg", ...]}` (validation) and `{field: "msg"}`
/// (the register endpoint) shapes.
fn first_field_error(body: &serde_json::Value) -> Option<String> {
    for value in body.as_object()?.values() {
        match value {
            serde_json::Value::String(msg) => return Some(msg.clone()),
            serde_json::Value::Array(msgs) => {
                if let Some(serde_json::Value::String(msg)) = msgs.first() {
                    return Some(msg.clone());
                }
            }
            _ => {}
        }
    }
    None
}

/// Decode a successful response body
async fn json_body<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|_| ApiError::Network)?;
    let value = JsFuture::from(promise).await.map_err(|e| {
        log::error!("failed reading response body: {}", js_error_message(&e));
        ApiError::Network
    })?;
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        log::error!("unexpected response shape: {}", e);
        ApiError::Network
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_field_error_picks_first_message_of_first_field() {
        let body = json!({
            "name": ["This field may not be blank.", "Second message."],
            "frequency": ["Unknown frequency."]
        });
        assert_eq!(
            first_field_error(&body).as_deref(),
            Some("This field may not be blank.")
        );
    }

    #[test]
    fn test_first_field_error_accepts_string_values() {
        let body = json!({"error": "Username already exists."});
        assert_eq!(
            first_field_error(&body).as_deref(),
            Some("Username already exists.")
        );
    }

    #[test]
    fn test_first_field_error_skips_unusable_values() {
        let body = json!({"count": 3, "detail": ["Broken."]});
        assert_eq!(first_field_error(&body).as_deref(), Some("Broken."));
    }

    #[test]
    fn test_first_field_error_rejects_non_objects() {
        assert_eq!(first_field_error(&json!("plain string")), None);
        assert_eq!(first_field_error(&json!(["a", "b"])), None);
        assert_eq!(first_field_error(&json!({})), None);
    }
}
