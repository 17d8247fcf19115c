pub mod http_client;
pub mod persistence;
pub mod tmdb;

pub use http_client::{RateLimitClient, RetryPolicy};
pub use persistence::{InMemoryCatalogStore, PostgresCatalogStore};
pub use tmdb::TmdbCatalogSource;
