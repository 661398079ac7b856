//! Outbound HTTP, centralized.
//!
//! Every request picks up the bearer token from storage; every response
//! goes through the 401 check. Pages only ever see `ApiError`.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

use crate::config::CONFIG;
use crate::models::ErrorBody;
use crate::services::session_store;

/// Settle time before the hard redirect after a 401, so in-flight UI
/// updates finish first.
const UNAUTHORIZED_REDIRECT_DELAY_MS: u32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never reached the server (connection refused, DNS,
    /// offline). Shown to users distinctly from server-side errors.
    Unreachable(String),
    /// The server answered with a non-2xx status.
    Http { status: u16, message: String },
    /// The server answered 2xx but the body did not match the expected
    /// shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unreachable(detail) => {
                write!(f, "Unable to contact backend. Is the server running? ({})", detail)
            }
            ApiError::Http { message, .. } => f.write_str(message),
            ApiError::Decode(detail) => {
                write!(f, "Unexpected response from the server ({})", detail)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

/// Attach the stored bearer token, if any.
fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    match session_store::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Synchronous part of 401 handling: wipe the session and flag the
/// expiry for the UI.
pub fn invalidate_session() {
    session_store::clear();
    session_store::set_session_expired();
    log::warn!("API returned 401 Unauthorized, clearing session");
}

/// A 401 means the token is no longer honored: invalidate the session,
/// then force re-authentication shortly after.
pub fn handle_unauthorized() {
    invalidate_session();
    Timeout::new(UNAUTHORIZED_REDIRECT_DELAY_MS, || {
        if let Some(win) = window() {
            let _ = win.location().set_href("/login");
        }
    })
    .forget();
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status == 401 {
        handle_unauthorized();
        return Err(ApiError::Http {
            status,
            message: "Session expired. Please sign in again.".to_string(),
        });
    }
    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ApiError::Http { status, message });
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let url = CONFIG.api_url(endpoint);
    let response = with_bearer(Request::get(&url))
        .send()
        .await
        .map_err(|err| ApiError::Unreachable(err.to_string()))?;
    decode_response(response).await
}

pub async fn post_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = CONFIG.api_url(endpoint);
    let response = with_bearer(Request::post(&url))
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Unreachable(err.to_string()))?;
    decode_response(response).await
}

pub async fn put_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = CONFIG.api_url(endpoint);
    let response = with_bearer(Request::put(&url))
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Unreachable(err.to_string()))?;
    decode_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_errors_carry_the_actionable_message() {
        let err = ApiError::Unreachable("connect ECONNREFUSED".to_string());
        let shown = err.to_string();
        assert!(shown.contains("Unable to contact backend"));
        assert!(shown.contains("ECONNREFUSED"));
        assert!(err.is_unreachable());
    }

    #[test]
    fn http_errors_surface_the_backend_message_verbatim() {
        let err = ApiError::Http { status: 422, message: "Email already registered".into() };
        assert_eq!(err.to_string(), "Email already registered");
        assert!(!err.is_unreachable());
    }
}
