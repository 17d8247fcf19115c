pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{CatalogMapper, LocalStore, MovieRepository, OnlineSource};
pub use domain::{
    Category, CountryResult, FavoriteId, Movie, PopularPerson, RatingBody, Serie, TitleId,
    Token, Trailer, WatchProvider,
};
pub use infrastructure::{InMemoryCatalogStore, PostgresCatalogStore, TmdbCatalogSource};
