//! Caller-identity extraction.
//!
//! The service sits behind an identity-aware proxy that verifies callers and
//! attaches the verified uid as a request header. This module reads that
//! header back out; no credential ever reaches this code.

use axum::http::HeaderMap;

use crate::application::identity::CallerIdentity;

/// Header carrying the verified caller uid, attached by the platform.
pub const CALLER_UID_HEADER: &str = "x-authenticated-uid";

/// Read the caller identity attached to a request, if any.
///
/// A missing, empty, or non-UTF-8 header value means the call is
/// unauthenticated.
#[must_use]
pub fn caller_identity(headers: &HeaderMap) -> Option<CallerIdentity> {
    let uid = headers.get(CALLER_UID_HEADER)?.to_str().ok()?;
    if uid.is_empty() {
        return None;
    }
    Some(CallerIdentity::new(uid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn absent_header_is_anonymous() {
        let headers = HeaderMap::new();
        assert!(caller_identity(&headers).is_none());
    }

    #[test]
    fn empty_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(CALLER_UID_HEADER, HeaderValue::from_static(""));
        assert!(caller_identity(&headers).is_none());
    }

    #[test]
    fn header_value_becomes_identity() {
        let mut headers = HeaderMap::new();
        headers.insert(CALLER_UID_HEADER, HeaderValue::from_static("uid-42"));

        let identity = caller_identity(&headers).unwrap();
        assert_eq!(identity.uid.as_str(), "uid-42");
    }
}
