//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build-time override of the backend location, e.g.
/// `CEIC_API_URL=https://api.ceic.edu.gt trunk build`
const API_URL_OVERRIDE: Option<&str> = option_env!("CEIC_API_URL");

/// Get the base URL for API requests
///
/// Uses `CEIC_API_URL` when it was set at build time, otherwise constructs
/// the API base URL from the current window location, using port 3000 for
/// the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_URL_OVERRIDE.filter(|u| !u.trim().is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
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

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/alumno/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
