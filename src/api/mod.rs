//! Backend API
//!
//! Fetch wrappers for the REST backend, organized by resource. This is the
//! frontend's only network layer: every call resolves to a typed value or an
//! [`ApiError`] that the caller turns into a feedback line.

mod products;

pub use products::*;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::ErrorBody;

/// Failure of a backend call: the HTTP status plus the server message when
/// the error body carried one. Transport-level failures use status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: Option<String>,
}

impl ApiError {
    fn transport(err: JsValue) -> Self {
        web_sys::console::error_1(&format!("[API] request failed: {:?}", err).into());
        Self {
            status: 0,
            message: None,
        }
    }

    fn decode(detail: String) -> Self {
        web_sys::console::error_1(&format!("[API] bad response body: {}", detail).into());
        Self {
            status: 0,
            message: None,
        }
    }

    /// Server message when present, otherwise `Erro {status} ao {action}`.
    pub fn or_generic(&self, action: &str) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("Erro {} ao {}", self.status, action),
        }
    }
}

/// Issue a request and hand back the raw response. A JSON body also sets the
/// content type header.
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::transport)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError {
        status: 0,
        message: None,
    })?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::transport)?;
    response.dyn_into::<Response>().map_err(ApiError::transport)
}

/// Read the failure out of a non-success response. The body is parsed per the
/// backend's error convention; an unparseable body counts as "no message".
async fn error_from(response: &Response) -> ApiError {
    let status = response.status();
    let message = match response.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
                .unwrap_or_default()
                .message,
            Err(_) => None,
        },
        Err(_) => None,
    };
    ApiError { status, message }
}

async fn parse_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::transport)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::transport)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::decode(e.to_string()))
}

/// Request plus typed JSON response; non-success becomes an [`ApiError`].
async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = send(method, url, body).await?;
    if !response.ok() {
        return Err(error_from(&response).await);
    }
    parse_json(&response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_generic_prefers_server_message() {
        let err = ApiError {
            status: 422,
            message: Some("name é obrigatório".to_string()),
        };
        assert_eq!(err.or_generic("salvar"), "name é obrigatório");
    }

    #[test]
    fn test_or_generic_falls_back_to_status() {
        let err = ApiError {
            status: 500,
            message: None,
        };
        assert_eq!(err.or_generic("excluir"), "Erro 500 ao excluir");
    }
}
