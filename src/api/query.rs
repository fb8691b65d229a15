//! Query-string assembly and paginated-response normalization

use serde_json::Value;

use super::constants::headers;

/// Normalized result of a list-style endpoint: the parsed JSON body plus
/// the opaque absolute URI of the next page, when the response carried
/// one in its `next_page` header. Pass `next_page` back verbatim to
/// [`StarfishService::get_next_page`](super::client::StarfishService) to
/// continue the listing.
#[derive(Debug, Clone)]
pub struct PagedResult {
    pub data: Value,
    pub next_page: Option<String>,
}

impl PagedResult {
    /// Check if there are more results available
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub(crate) fn from_response_parts(data: Value, next_page: Option<String>) -> Self {
        Self { data, next_page }
    }

    pub(crate) fn next_page_header(response: &reqwest::Response) -> Option<String> {
        response
            .headers()
            .get(headers::NEXT_PAGE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    }
}

/// Percent-encode `key=value` pairs and join them with `&`
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append an encoded query string to a URI, after `?` or `&` depending on
/// whether the URI already has a query component
pub fn append_query(uri: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return uri.to_string();
    }
    let separator = if uri.contains('?') { '&' } else { '?' };
    format!("{}{}{}", uri, separator, encode_query(params))
}
