//! Movie-data provider subsystem.

pub mod omdb;
pub mod types;

pub use omdb::OmdbClient;
pub use types::{Movie, ProviderError, ProviderResult, SearchResponse};
