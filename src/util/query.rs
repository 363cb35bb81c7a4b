//! Building filter URLs for client-side navigation.
//!
//! List pages keep their filters in the URL query string, so a filter change
//! is a navigation and the fetch is keyed on the query map. Values are
//! percent-encoded just enough to keep the query string well-formed; the
//! backend sees them decoded.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Write;

/// `path?name=value&...` with empty values dropped. Returns the bare path
/// when every value is empty.
pub fn filter_url(path: &str, filters: &[(&str, &str)]) -> String {
    let mut url = path.to_owned();
    let mut separator = '?';
    for (name, value) in filters {
        if value.is_empty() {
            continue;
        }
        let _ = write!(url, "{separator}{name}={}", encode_value(value));
        separator = '&';
    }
    url
}

/// Percent-encode the characters that would break a query string.
fn encode_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
