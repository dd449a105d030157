//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs, attaching the bearer
//! token and turning HTTP failures into [`ApiError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::system::auth::{context::expire_session, storage};

/// Port of the REST backend when no explicit base URL is configured.
const DEFAULT_API_PORT: u16 = 8080;

/// Plain-text error bodies at least this long are not shown to the user.
const MAX_INLINE_MESSAGE_LEN: usize = 200;

/// Get the base URL for API requests
///
/// `ADMIN_API_BASE` set at build time wins, e.g. `ADMIN_API_BASE=https://api.shop.vn trunk build`.
/// Otherwise the URL is built from the current window location on port 8080.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends a query string built with `serde_qs`. Empty queries leave the path untouched.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        Ok(_) => path.to_string(),
        Err(e) => {
            log::warn!("Failed to encode query for {}: {}", path, e);
            path.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            _ => ApiError::Http {
                status,
                message: extract_message(body),
            },
        }
    }

    /// 401 and 403 both end the session.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for message bars and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Forbidden => "You do not have permission to perform this action.".to_string(),
            ApiError::Http { status, message } if message.is_empty() => {
                format!("Server error: {}", status)
            }
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(_) => "Network error. Please check your connection.".to_string(),
            ApiError::Parse(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// JSON bodies contribute their `message` or `error` field; plain text is used
/// as is when it is short enough.
pub fn extract_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(text) = value.as_str() {
            return text.trim().to_string();
        }
        return ["message", "error"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();
    }
    if body.chars().count() < MAX_INLINE_MESSAGE_LEN {
        body.to_string()
    } else {
        String::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    }
}

fn authorized(verb: Verb, path: &str) -> RequestBuilder {
    let request = builder(verb, &api_url(path));
    match storage::get_access_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Maps non-2xx responses to [`ApiError`]. With `session` set, 401/403 expire the session.
async fn check(response: Response, session: bool) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    if session && err.is_auth() {
        log::warn!("{} {}: ending session", status, response.url());
        expire_session();
    } else {
        log::error!("{} {}: {}", status, response.url(), err);
    }
    Err(err)
}

/// Body of a successful response; an unreadable body is a parse error, not an empty reply.
fn body_text(read: Result<String, gloo_net::Error>) -> Result<String, ApiError> {
    read.map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn read_text(response: Response) -> Result<String, ApiError> {
    body_text(response.text().await)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Authorized GET returning JSON.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Verb::Get, path).send().await.map_err(network)?;
    parse(check(response, true).await?).await
}

/// Authorized request with a JSON body, returning JSON.
pub async fn send_json<B, T>(verb: Verb, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorized(verb, path)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    parse(check(response, true).await?).await
}

/// Authorized request with a JSON body; the response body is returned as text.
pub async fn send_json_for_text<B: Serialize>(
    verb: Verb,
    path: &str,
    body: &B,
) -> Result<String, ApiError> {
    let response = authorized(verb, path)
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    read_text(check(response, true).await?).await
}

/// Authorized request without a body; the response body is returned as text.
pub async fn send_empty(verb: Verb, path: &str) -> Result<String, ApiError> {
    let response = authorized(verb, path).send().await.map_err(network)?;
    read_text(check(response, true).await?).await
}

/// Unauthenticated POST used by login and registration. 401 does not touch the session.
pub async fn post_public(path: &str, body: &impl Serialize) -> Result<Response, ApiError> {
    let response = builder(Verb::Post, &api_url(path))
        .json(body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(network)?;
    check(response, false).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_sales_overview::{DateRange, TopProductsQuery};

    #[test]
    fn test_unreadable_body_is_parse_error() {
        assert_eq!(body_text(Ok("Banned".to_string())), Ok("Banned".to_string()));
        let err = body_text(Err(gloo_net::Error::GlooError("stream closed".into()))).unwrap_err();
        assert!(matches!(err, ApiError::Parse(ref m) if m.contains("stream closed")));
    }

    #[test]
    fn test_extract_message_from_json() {
        assert_eq!(extract_message(r#"{"message":"Order not found"}"#), "Order not found");
        assert_eq!(extract_message(r#"{"error":"Bad Request","status":400}"#), "Bad Request");
        assert_eq!(extract_message(r#"{"message":"","error":"Oops"}"#), "Oops");
        assert_eq!(extract_message(r#"{"status":500}"#), "");
        assert_eq!(extract_message(r#""quoted""#), "quoted");
    }

    #[test]
    fn test_extract_message_from_text() {
        assert_eq!(extract_message("  Sai email hoặc mật khẩu "), "Sai email hoặc mật khẩu");
        assert_eq!(extract_message(&"x".repeat(250)), "");
        assert_eq!(extract_message(""), "");
    }

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, "whatever"), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
        assert_eq!(
            ApiError::from_status(400, "You cannot ban your own account"),
            ApiError::Http {
                status: 400,
                message: "You cannot ban your own account".to_string()
            }
        );
        assert!(ApiError::Forbidden.is_auth());
        assert!(!ApiError::Network("x".into()).is_auth());
    }

    #[test]
    fn test_user_message() {
        let empty = ApiError::Http { status: 502, message: String::new() };
        assert_eq!(empty.user_message(), "Server error: 502");
        let with_text = ApiError::Http { status: 400, message: "Out of stock".into() };
        assert_eq!(with_text.user_message(), "Out of stock");
        assert_eq!(
            ApiError::Network("reset".into()).user_message(),
            "Network error. Please check your connection."
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/orders", &DateRange::default()), "/api/orders");
        assert_eq!(
            with_query("/api/orders", &DateRange::new("2025-01-01", "2025-01-31")),
            "/api/orders?start=2025-01-01&end=2025-01-31"
        );
        let top = with_query("/api/orders/top-products", &TopProductsQuery::by_revenue(DateRange::default()));
        assert!(top.starts_with("/api/orders/top-products?"));
        assert!(top.contains("sortBy=revenue"));
        assert!(top.contains("limit=5"));
        assert!(!top.contains("start"));
    }
}
