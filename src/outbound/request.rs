//! Declarative descriptors for outbound HTTP calls.
//!
//! # Responsibilities
//! - Describe one outbound call (method, URL, params, body, headers, auth)
//! - Validate and normalize the HTTP method
//! - Stay inert: no I/O happens until the executor runs the descriptor

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::outbound::error::OutboundError;

/// Supported outbound HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether this method carries a request body.
    pub fn has_body(self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl FromStr for HttpMethod {
    type Err = OutboundError;

    /// Case-insensitive parse; anything outside the four supported
    /// methods is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(OutboundError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Descriptor for a single outbound HTTP call.
///
/// Constructed by provider adapters and turned into an executable request
/// by the builder; carries no connection state of its own.
#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Absolute target URL; must be non-empty and parseable.
    pub url: String,

    /// Query parameters merged into the URL's existing query string.
    pub uri_params: BTreeMap<String, String>,

    /// Request body, used only for non-GET methods.
    pub body: Vec<u8>,

    /// Additional headers, appended to the defaults.
    pub headers: BTreeMap<String, String>,

    /// Basic-auth credentials; both username and password or neither.
    pub basic_auth: Option<(String, String)>,
}

impl ApiRequest {
    /// Create a descriptor with the given method and URL.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a GET descriptor.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Shorthand for a POST descriptor.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Add one query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.uri_params.insert(key.into(), value.into());
        self
    }

    /// Add one header entry.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body (ignored for GET at build time).
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Set basic-auth credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }
}
