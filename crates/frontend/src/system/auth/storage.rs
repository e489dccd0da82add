use crate::shared::storage::{KeyValueStore, LocalStore};

/// Bearer token written by the login flow of the school portal
pub const TOKEN_KEY: &str = "ceic_token";

/// Get access token from localStorage.
///
/// Read on every request and never cached, so a token replaced in another
/// tab is picked up by the next call.
pub fn get_token() -> Option<String> {
    LocalStore.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Clear the authentication token (after the backend rejected it)
pub fn clear_token() {
    LocalStore.remove(TOKEN_KEY);
}

/// `Authorization` header value for the current token
pub fn auth_header() -> Option<String> {
    get_token().map(|token| format!("Bearer {}", token))
}
