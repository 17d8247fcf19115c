use async_trait::async_trait;

use crate::modules::catalog::domain::{FavoriteId, Movie, Serie, Token};
use crate::shared::errors::AppResult;

/// Port (interface) for local persistence: the cached token and the
/// favorite movies and series.
///
/// Favorites are keyed by `FavoriteId`. Inserting an existing id replaces
/// the stored row; deleting a missing row is not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Overwrite the cached token
    async fn save_token(&self, token: &Token) -> AppResult<()>;

    async fn load_token(&self) -> AppResult<Option<Token>>;

    async fn insert_favorite_movie(&self, movie: &Movie) -> AppResult<()>;

    async fn get_favorite_movies(&self) -> AppResult<Vec<Movie>>;

    async fn delete_favorite_movie(&self, movie: &Movie) -> AppResult<()>;

    async fn get_favorite_movie_by_id(&self, id: FavoriteId) -> AppResult<Option<Movie>>;

    async fn insert_favorite_series(&self, serie: &Serie) -> AppResult<()>;

    async fn get_favorite_series(&self) -> AppResult<Vec<Serie>>;

    async fn delete_favorite_series(&self, serie: &Serie) -> AppResult<()>;

    async fn get_favorite_series_by_id(&self, id: FavoriteId) -> AppResult<Option<Serie>>;
}
