use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::catalog::application::ports::LocalStore;
use crate::modules::catalog::domain::{FavoriteId, Movie, Serie, Token};
use crate::shared::errors::AppResult;

/// Process-local store used when no database is configured.
///
/// Same semantics as the PostgreSQL store: one token slot, upsert on insert,
/// listings ordered by id. Nothing survives the process.
#[derive(Default, Clone)]
pub struct InMemoryCatalogStore {
    token: Arc<RwLock<Option<Token>>>,
    movies: Arc<DashMap<i64, Movie>>,
    series: Arc<DashMap<i64, Serie>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for InMemoryCatalogStore {
    async fn save_token(&self, token: &Token) -> AppResult<()> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn load_token(&self) -> AppResult<Option<Token>> {
        Ok(self.token.read().await.clone())
    }

    async fn insert_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        self.movies.insert(i64::from(movie.id), movie.clone());
        Ok(())
    }

    async fn get_favorite_movies(&self) -> AppResult<Vec<Movie>> {
        let mut movies: Vec<Movie> = self.movies.iter().map(|e| e.value().clone()).collect();
        movies.sort_by_key(|m| m.id);
        Ok(movies)
    }

    async fn delete_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        self.movies.remove(&i64::from(movie.id));
        Ok(())
    }

    async fn get_favorite_movie_by_id(&self, id: FavoriteId) -> AppResult<Option<Movie>> {
        Ok(self.movies.get(&id.value()).map(|e| e.value().clone()))
    }

    async fn insert_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        self.series.insert(i64::from(serie.id), serie.clone());
        Ok(())
    }

    async fn get_favorite_series(&self) -> AppResult<Vec<Serie>> {
        let mut series: Vec<Serie> = self.series.iter().map(|e| e.value().clone()).collect();
        series.sort_by_key(|s| s.id);
        Ok(series)
    }

    async fn delete_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        self.series.remove(&i64::from(serie.id));
        Ok(())
    }

    async fn get_favorite_series_by_id(&self, id: FavoriteId) -> AppResult<Option<Serie>> {
        Ok(self.series.get(&id.value()).map(|e| e.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::TitleId;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id: TitleId::new(id).unwrap(),
            title: title.to_string(),
            original_title: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
        }
    }

    #[tokio::test]
    async fn test_token_slot_is_overwritten() {
        let store = InMemoryCatalogStore::new();
        assert_eq!(store.load_token().await.unwrap(), None);

        store.save_token(&Token::new("first", None)).await.unwrap();
        store.save_token(&Token::new("second", None)).await.unwrap();

        assert_eq!(
            store.load_token().await.unwrap(),
            Some(Token::new("second", None))
        );
    }

    #[tokio::test]
    async fn test_insert_replaces_and_lists_by_id() {
        let store = InMemoryCatalogStore::new();
        store.insert_favorite_movie(&movie(680, "Pulp Fiction")).await.unwrap();
        store.insert_favorite_movie(&movie(13, "Forrest Gump")).await.unwrap();
        store.insert_favorite_movie(&movie(680, "Pulp Fiction (1994)")).await.unwrap();

        let all = store.get_favorite_movies().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.value(), 13);
        assert_eq!(all[1].title, "Pulp Fiction (1994)");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_an_error() {
        let store = InMemoryCatalogStore::new();
        assert!(store.delete_favorite_movie(&movie(1, "Ghost")).await.is_ok());
        assert_eq!(
            store.get_favorite_movie_by_id(FavoriteId(1)).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_long_titles_are_kept_whole() {
        let store = InMemoryCatalogStore::new();
        let title = "A".repeat(400);
        store.insert_favorite_movie(&movie(42, &title)).await.unwrap();

        let stored = store.get_favorite_movie_by_id(FavoriteId(42)).await.unwrap();
        assert_eq!(stored.map(|m| m.title), Some(title));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryCatalogStore::new();
        let other = store.clone();
        store.insert_favorite_movie(&movie(7, "Se7en")).await.unwrap();
        assert!(other
            .get_favorite_movie_by_id(FavoriteId(7))
            .await
            .unwrap()
            .is_some());
    }
}
