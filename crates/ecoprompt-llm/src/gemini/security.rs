//! Error text sanitization
//!
//! Gemini error messages can echo request details. Messages that touch
//! credentials, quota, or backend internals are replaced with fixed text.

use crate::util::truncate_safe;

/// Longest error message passed through unchanged
const MAX_ERROR_LEN: usize = 300;

const CREDENTIAL_MARKERS: &[&str] = &[
    "api key",
    "apikey",
    "invalid key",
    "unauthorized",
    "authentication",
    "permission denied",
];

const QUOTA_MARKERS: &[&str] = &["rate limit", "quota", "resource_exhausted"];

const BACKEND_MARKERS: &[&str] = &["internal", "server error"];

/// Replace sensitive Gemini error text with a generic message
pub(crate) fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();
    let mentions = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

    if mentions(CREDENTIAL_MARKERS) {
        "Gemini authentication failed; check GEMINI_API_KEY".to_string()
    } else if mentions(QUOTA_MARKERS) {
        "Gemini rate limit or quota reached; retry later".to_string()
    } else if mentions(BACKEND_MARKERS) {
        "Gemini backend error; retry later".to_string()
    } else if error.len() > MAX_ERROR_LEN {
        format!("{}...(truncated)", truncate_safe(error, MAX_ERROR_LEN))
    } else {
        error.to_string()
    }
}
