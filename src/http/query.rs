//! Query string parsing module
//!
//! Minimal `key=value` pair extraction for the API routes.

use std::borrow::Cow;

/// Extract a query parameter value by name, percent-decoded.
///
/// The first matching pair wins. A key without `=` yields an empty
/// value; values that fail to decode are returned as-is.
pub fn query_param<'a>(query: Option<&'a str>, name: &str) -> Option<Cow<'a, str>> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            Some(urlencoding::decode(value).unwrap_or(Cow::Borrowed(value)))
        } else {
            None
        }
    })
}
