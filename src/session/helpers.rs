//! Session identification helpers

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Cookie carrying the session id for REST clients
pub const SESSION_COOKIE: &str = "storefront_session";

/// Returns the provided `session_id` or creates a new UUID string when `None`.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Picks the session for a request: an explicit id first, then the session
/// cookie, then a fresh id. The flag is true only for a fresh id.
pub fn resolve_session_id(explicit: Option<String>, headers: &HeaderMap) -> (String, bool) {
    if let Some(id) = explicit.or_else(|| cookie_value(headers, SESSION_COOKIE)) {
        return (id, false);
    }
    (get_or_create_session_id(None), true)
}

/// `Set-Cookie` value binding a client to `session_id`
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id)
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_explicit_id_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("storefront_session=from-cookie"),
        );
        assert_eq!(
            resolve_session_id(Some("explicit".into()), &headers),
            ("explicit".to_string(), false)
        );
    }

    #[test]
    fn test_cookie_is_used() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; storefront_session=abc123"),
        );
        assert_eq!(
            resolve_session_id(None, &headers),
            ("abc123".to_string(), false)
        );
    }

    #[test]
    fn test_fresh_id_when_nothing_given() {
        let (id, is_new) = resolve_session_id(None, &HeaderMap::new());
        assert!(is_new);
        assert_eq!(id.len(), 32);
        assert_eq!(
            session_cookie(&id),
            format!("storefront_session={}; Path=/; HttpOnly", id)
        );
    }
}
