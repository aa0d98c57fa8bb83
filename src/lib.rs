//! Movie Proxy Library
//!
//! A small backend that proxies movie-search and movie-detail queries to
//! an external provider over HTTP, recording a best-effort audit entry
//! for each request.

pub mod audit;
pub mod config;
pub mod http;
pub mod outbound;
pub mod provider;

pub use config::AppConfig;
pub use http::HttpServer;
