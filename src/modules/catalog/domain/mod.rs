pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{
    Category, CountryResult, Movie, PopularPerson, Serie, Token, Trailer, WatchProvider,
};
pub use value_objects::{FavoriteId, RatingBody, TitleId};
