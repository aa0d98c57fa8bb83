//! Turns request descriptors into executable requests.
//!
//! # Responsibilities
//! - Validate the descriptor URL
//! - Merge descriptor params into the URL query, deterministically encoded
//! - Attach body, headers, and basic auth
//! - Construct the `reqwest::Request`; no network I/O happens here

use std::collections::BTreeMap;

use reqwest::header::CONTENT_LENGTH;
use url::{form_urlencoded, Url};

use crate::outbound::error::{OutboundError, OutboundResult};
use crate::outbound::request::ApiRequest;

/// Build an executable request from a descriptor.
///
/// The client is only used as a request-builder handle; the returned
/// request can be executed against any client.
pub fn build_request(
    client: &reqwest::Client,
    api: &ApiRequest,
) -> OutboundResult<reqwest::Request> {
    if api.url.is_empty() {
        return Err(OutboundError::InvalidUrl("URL is required".to_string()));
    }

    let mut url = Url::parse(&api.url)
        .map_err(|e| OutboundError::InvalidUrl(format!("{}: {}", api.url, e)))?;

    // Existing query pairs survive alongside descriptor params; duplicate
    // keys become repeated parameters rather than overwrites.
    let encoded = merge_query(&url, &api.uri_params);
    if !api.uri_params.is_empty() {
        url.set_query(Some(&encoded));
    }

    let mut builder = client.request(api.method.into(), url);

    if api.method.has_body() {
        builder = builder.body(api.body.clone());
    }

    for (key, value) in &api.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    if let Some((username, password)) = &api.basic_auth {
        if !username.is_empty() && !password.is_empty() {
            builder = builder.basic_auth(username, Some(password));
        }
    }

    // Content-Length deliberately reflects the encoded query string, not
    // the body. The provider integration was built against this wire
    // behavior and it must stay byte-identical.
    builder = builder.header(CONTENT_LENGTH, encoded.len());

    builder
        .build()
        .map_err(|e| OutboundError::Transport(e.to_string()))
}

/// Merge the URL's existing query pairs with descriptor params into one
/// canonical encoding: sorted by key, stable within a key.
fn merge_query(url: &Url, params: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
