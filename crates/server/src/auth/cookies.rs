use axum::http::{header, HeaderMap};
use cookie::Cookie;

const DEFAULT_ACCESS_COOKIE: &str = "dashboard_access";

/// Name of the cookie holding the access token (`ACCESS_COOKIE_NAME` overrides).
pub fn access_cookie_name() -> String {
    std::env::var("ACCESS_COOKIE_NAME")
        .ok()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_ACCESS_COOKIE.to_string())
}

/// Extract the access token from the cookie (preferred) or a Bearer header.
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, &access_cookie_name()) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Parse a specific cookie value from the Cookie headers.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}
