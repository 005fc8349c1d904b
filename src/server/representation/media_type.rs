//! Content negotiation for the hypermedia representation.

use axum::http::{header, HeaderMap};

/// Vendor media type that selects the hypermedia (HATEOAS) representation.
pub const HATEOAS_MEDIA_TYPE: &str = "application/vnd.library.hateoas+json";

/// Whether the request's `Accept` header asks for the hypermedia
/// representation.
///
/// Each comma-separated entry is compared against the vendor type with its
/// parameters stripped, case-insensitively. A missing or unreadable header
/// selects the plain representation.
pub fn accepts_hateoas(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|value| value.to_str().ok()) else {
        return false;
    };

    accept.split(',').any(|entry| {
        let media_type = match entry.find(';') {
            Some(index) => &entry[..index],
            None => entry,
        };
        media_type.trim().eq_ignore_ascii_case(HATEOAS_MEDIA_TYPE)
    })
}
