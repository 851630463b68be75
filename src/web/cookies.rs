// src/web/cookies.rs — Session cookie handling

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the cookie carrying the session key.
pub const SESSION_COOKIE: &str = "stockroom_sid";

/// The session key for one request, plus whether this request minted it
/// (a minted key means the response must carry a `Set-Cookie`).
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub key: String,
    pub minted: bool,
}

/// Take the session key from the request's cookie, minting a fresh one when
/// the cookie is missing or malformed. Only well-formed UUIDs are honored so
/// clients cannot pick their own keys.
pub fn resolve(headers: &HeaderMap) -> ResolvedSession {
    if let Some(key) = session_key(headers) {
        return ResolvedSession { key, minted: false };
    }
    ResolvedSession {
        key: Uuid::new_v4().to_string(),
        minted: true,
    }
}

fn session_key(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
        {
            if Uuid::parse_str(value).is_ok() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// `Set-Cookie` value for a freshly minted session key.
pub fn set_cookie(key: &str) -> String {
    format!("{SESSION_COOKIE}={key}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_resolve_without_cookie_mints() {
        let session = resolve(&HeaderMap::new());
        assert!(session.minted);
        assert!(Uuid::parse_str(&session.key).is_ok());
    }

    #[test]
    fn test_resolve_honors_existing_key() {
        let key = Uuid::new_v4().to_string();
        let headers = headers_with_cookie(&format!("{SESSION_COOKIE}={key}"));
        let session = resolve(&headers);
        assert!(!session.minted);
        assert_eq!(session.key, key);
    }

    #[test]
    fn test_resolve_skips_other_cookies() {
        let key = Uuid::new_v4().to_string();
        let headers =
            headers_with_cookie(&format!("theme=dark; {SESSION_COOKIE}={key}; lang=en"));
        assert_eq!(resolve(&headers).key, key);
    }

    #[test]
    fn test_non_uuid_value_is_replaced() {
        let headers = headers_with_cookie(&format!("{SESSION_COOKIE}=chosen-by-attacker"));
        let session = resolve(&headers);
        assert!(session.minted);
        assert_ne!(session.key, "chosen-by-attacker");
    }

    #[test]
    fn test_prefix_named_cookie_is_not_ours() {
        let headers = headers_with_cookie(&format!(
            "{SESSION_COOKIE}_backup={}",
            Uuid::new_v4()
        ));
        assert!(resolve(&headers).minted);
    }

    #[test]
    fn test_set_cookie_attributes() {
        let value = set_cookie("abc");
        assert!(value.starts_with("stockroom_sid=abc"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
    }
}
