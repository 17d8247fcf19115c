use std::sync::Arc;

use super::mapper::CatalogMapper;
use super::ports::{LocalStore, OnlineSource};
use crate::modules::catalog::domain::{
    Category, CountryResult, FavoriteId, Movie, PopularPerson, RatingBody, Serie, TitleId,
    Token, Trailer,
};
use crate::shared::config::TokenPersistence;
use crate::shared::errors::{AppResult, MapEach};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_warn};

/// Single entry point for catalog data.
///
/// Remote operations call the online source once, pass errors through
/// unchanged and map successful payloads to domain entities. Favorites are
/// local-only and go straight to the local store. The repository keeps no
/// state between calls; it can be cloned and shared freely.
#[derive(Clone)]
pub struct MovieRepository {
    local: Arc<dyn LocalStore>,
    online: Arc<dyn OnlineSource>,
    token_persistence: TokenPersistence,
}

impl MovieRepository {
    pub fn new(local: Arc<dyn LocalStore>, online: Arc<dyn OnlineSource>) -> Self {
        Self {
            local,
            online,
            token_persistence: TokenPersistence::default(),
        }
    }

    pub fn with_token_policy(mut self, policy: TokenPersistence) -> Self {
        self.token_persistence = policy;
        self
    }

    pub fn token_policy(&self) -> TokenPersistence {
        self.token_persistence
    }

    /// Fetch a token from the online source.
    ///
    /// Side effect: every successful fetch is written to the local store
    /// before returning. With `TokenPersistence::BestEffort` a storage
    /// failure is logged and the fetched token is still returned; with
    /// `Strict` the storage error is returned instead.
    pub async fn get_token(&self) -> AppResult<Token> {
        let token = match self.online.get_token().await {
            Ok(token) => token,
            Err(e) => {
                LogContext::catalog_outcome("get_token", None, Some(&e.to_string()));
                return Err(e);
            }
        };

        if let Err(e) = self.local.save_token(&token).await {
            match self.token_persistence {
                TokenPersistence::Strict => return Err(e),
                TokenPersistence::BestEffort => {
                    log_warn!("Fetched token could not be cached locally: {}", e);
                }
            }
        }

        LogContext::catalog_outcome("get_token", None, None);
        Ok(token)
    }

    /// Token last written by `get_token`, if any
    pub async fn cached_token(&self) -> AppResult<Option<Token>> {
        self.local.load_token().await
    }

    pub async fn get_categories(&self) -> AppResult<Vec<Category>> {
        let result = self
            .online
            .get_categories()
            .await
            .map_each(CatalogMapper::to_category);
        Self::log_list("get_categories", &result);
        result
    }

    pub async fn get_movies_by_category_id(&self, id: TitleId) -> AppResult<Vec<Movie>> {
        log_debug!("Fetching movies for category {}", id);
        let result = self
            .online
            .get_movies_by_category_id(id)
            .await
            .map_each(CatalogMapper::to_movie);
        Self::log_list("get_movies_by_category_id", &result);
        result
    }

    pub async fn get_series_by_category_id(&self, id: TitleId) -> AppResult<Vec<Serie>> {
        log_debug!("Fetching series for category {}", id);
        let result = self
            .online
            .get_series_by_category_id(id)
            .await
            .map_each(CatalogMapper::to_serie);
        Self::log_list("get_series_by_category_id", &result);
        result
    }

    pub async fn get_popular_movies(&self) -> AppResult<Vec<Movie>> {
        let result = self
            .online
            .get_popular_movies()
            .await
            .map_each(CatalogMapper::popular_to_movie);
        Self::log_list("get_popular_movies", &result);
        result
    }

    pub async fn get_top_rated_movies(&self) -> AppResult<Vec<Movie>> {
        let result = self
            .online
            .get_top_rated_movies()
            .await
            .map_each(CatalogMapper::popular_to_movie);
        Self::log_list("get_top_rated_movies", &result);
        result
    }

    pub async fn get_upcoming_movies(&self) -> AppResult<Vec<Movie>> {
        let result = self
            .online
            .get_upcoming_movies()
            .await
            .map_each(CatalogMapper::popular_to_movie);
        Self::log_list("get_upcoming_movies", &result);
        result
    }

    pub async fn get_movie(&self, id: TitleId) -> AppResult<Movie> {
        let result = self
            .online
            .get_movie(id)
            .await
            .map(CatalogMapper::details_to_movie);
        Self::log_single("get_movie", &result);
        result
    }

    pub async fn get_trailer_by_movie_id(&self, id: TitleId) -> AppResult<Trailer> {
        let result = self
            .online
            .get_trailer_by_movie_id(id)
            .await
            .map(CatalogMapper::to_trailer);
        Self::log_single("get_trailer_by_movie_id", &result);
        result
    }

    pub async fn get_trailer_by_series_id(&self, id: TitleId) -> AppResult<Trailer> {
        let result = self
            .online
            .get_trailer_by_series_id(id)
            .await
            .map(CatalogMapper::to_trailer);
        Self::log_single("get_trailer_by_series_id", &result);
        result
    }

    pub async fn get_providers_by_movie_id(&self, id: TitleId) -> AppResult<Vec<CountryResult>> {
        let result = self
            .online
            .get_providers_by_movie_id(id)
            .await
            .map_each(CatalogMapper::to_country_result);
        Self::log_list("get_providers_by_movie_id", &result);
        result
    }

    pub async fn get_providers_by_serie_id(&self, id: TitleId) -> AppResult<Vec<CountryResult>> {
        let result = self
            .online
            .get_providers_by_serie_id(id)
            .await
            .map_each(CatalogMapper::to_country_result);
        Self::log_list("get_providers_by_serie_id", &result);
        result
    }

    /// Submit a rating. The flag is the online source's acknowledgement,
    /// passed through as-is.
    pub async fn add_rating(&self, id: TitleId, rating: RatingBody) -> AppResult<bool> {
        log_debug!("Submitting rating {} for title {}", rating.value(), id);
        let result = self.online.add_rating(id, rating).await;
        Self::log_single("add_rating", &result);
        result
    }

    pub async fn get_popular_persons(&self) -> AppResult<Vec<PopularPerson>> {
        let result = self
            .online
            .get_popular_persons()
            .await
            .map_each(CatalogMapper::to_popular_person);
        Self::log_list("get_popular_persons", &result);
        result
    }

    // -------------------------------------------------------------------------
    // Favorites (local store only)
    // -------------------------------------------------------------------------

    pub async fn insert_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        log_debug!("Adding movie {} to favorites", movie.id);
        self.local.insert_favorite_movie(movie).await
    }

    pub async fn get_favorite_movies(&self) -> AppResult<Vec<Movie>> {
        self.local.get_favorite_movies().await
    }

    pub async fn delete_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        log_debug!("Removing movie {} from favorites", movie.id);
        self.local.delete_favorite_movie(movie).await
    }

    /// `Ok(None)` when the movie is not a favorite
    pub async fn get_favorite_movie_by_id(&self, id: FavoriteId) -> AppResult<Option<Movie>> {
        self.local.get_favorite_movie_by_id(id).await
    }

    pub async fn insert_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        log_debug!("Adding series {} to favorites", serie.id);
        self.local.insert_favorite_series(serie).await
    }

    pub async fn get_favorite_series(&self) -> AppResult<Vec<Serie>> {
        self.local.get_favorite_series().await
    }

    pub async fn delete_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        log_debug!("Removing series {} from favorites", serie.id);
        self.local.delete_favorite_series(serie).await
    }

    pub async fn get_favorite_series_by_id(&self, id: FavoriteId) -> AppResult<Option<Serie>> {
        self.local.get_favorite_series_by_id(id).await
    }

    fn log_list<T>(operation: &str, result: &AppResult<Vec<T>>) {
        match result {
            Ok(items) => LogContext::catalog_outcome(operation, Some(items.len()), None),
            Err(e) => LogContext::catalog_outcome(operation, None, Some(&e.to_string())),
        }
    }

    fn log_single<T>(operation: &str, result: &AppResult<T>) {
        match result {
            Ok(_) => LogContext::catalog_outcome(operation, None, None),
            Err(e) => LogContext::catalog_outcome(operation, None, Some(&e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::dto::{GenreDto, MovieDetailsDto};
    use crate::modules::catalog::application::ports::{MockLocalStore, MockOnlineSource};
    use crate::shared::errors::AppError;
    use mockall::predicate::eq;

    fn token() -> Token {
        Token::new("0e7cd59c1a", None)
    }

    fn repository(local: MockLocalStore, online: MockOnlineSource) -> MovieRepository {
        MovieRepository::new(Arc::new(local), Arc::new(online))
    }

    #[tokio::test]
    async fn test_get_token_saves_exactly_once() {
        let mut online = MockOnlineSource::new();
        online.expect_get_token().times(1).returning(|| Ok(token()));

        let mut local = MockLocalStore::new();
        local
            .expect_save_token()
            .withf(|t| *t == token())
            .times(1)
            .returning(|_| Ok(()));

        let result = repository(local, online).get_token().await;
        assert_eq!(result, Ok(token()));
    }

    #[tokio::test]
    async fn test_get_token_error_skips_local_store() {
        let failure = AppError::Unauthorized("Invalid API key".to_string());
        let returned = failure.clone();

        let mut online = MockOnlineSource::new();
        online
            .expect_get_token()
            .returning(move || Err(returned.clone()));

        let mut local = MockLocalStore::new();
        local.expect_save_token().never();

        let result = repository(local, online).get_token().await;
        assert_eq!(result, Err(failure));
    }

    #[tokio::test]
    async fn test_token_persistence_policies() {
        let storage_failure = AppError::DatabaseError("disk full".to_string());

        for (policy, expected) in [
            (TokenPersistence::BestEffort, Ok(token())),
            (TokenPersistence::Strict, Err(storage_failure.clone())),
        ] {
            let mut online = MockOnlineSource::new();
            online.expect_get_token().returning(|| Ok(token()));

            let failure = storage_failure.clone();
            let mut local = MockLocalStore::new();
            local
                .expect_save_token()
                .times(1)
                .returning(move |_| Err(failure.clone()));

            let repo = repository(local, online).with_token_policy(policy);
            assert_eq!(repo.get_token().await, expected);
        }
    }

    #[tokio::test]
    async fn test_categories_are_mapped_in_order() {
        let mut online = MockOnlineSource::new();
        online.expect_get_categories().returning(|| {
            Ok(vec![
                GenreDto {
                    id: TitleId::new(28).unwrap(),
                    name: "Action".to_string(),
                },
                GenreDto {
                    id: TitleId::new(35).unwrap(),
                    name: "Comedy".to_string(),
                },
            ])
        });

        let categories = repository(MockLocalStore::new(), online)
            .get_categories()
            .await
            .unwrap();

        assert_eq!(
            categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Action", "Comedy"]
        );
    }

    #[tokio::test]
    async fn test_get_movie_passes_id_and_maps_details() {
        let id = TitleId::new(550).unwrap();

        let mut online = MockOnlineSource::new();
        online
            .expect_get_movie()
            .with(eq(id))
            .times(1)
            .returning(|id| {
                Ok(MovieDetailsDto {
                    id,
                    title: "Fight Club".to_string(),
                    original_title: None,
                    overview: None,
                    tagline: None,
                    poster_path: None,
                    backdrop_path: None,
                    release_date: Some("1999-10-15".to_string()),
                    runtime: Some(139),
                    status: Some("Released".to_string()),
                    vote_average: Some(8.4),
                    vote_count: Some(26280),
                    popularity: Some(61.4),
                    genres: None,
                })
            });

        let movie = repository(MockLocalStore::new(), online)
            .get_movie(id)
            .await
            .unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "Fight Club");
    }

    #[tokio::test]
    async fn test_add_rating_passes_flag_through() {
        let id = TitleId::new(550).unwrap();
        let rating = RatingBody::new(8.5).unwrap();

        let mut online = MockOnlineSource::new();
        online
            .expect_add_rating()
            .with(eq(id), eq(rating))
            .returning(|_, _| Ok(false));

        let result = repository(MockLocalStore::new(), online)
            .add_rating(id, rating)
            .await;
        assert_eq!(result, Ok(false));
    }

    #[tokio::test]
    async fn test_favorites_never_touch_online_source() {
        let mut online = MockOnlineSource::new();
        online.expect_get_popular_movies().never();

        let mut local = MockLocalStore::new();
        local
            .expect_get_favorite_movie_by_id()
            .with(eq(FavoriteId(42)))
            .returning(|_| Ok(None));
        local.expect_get_favorite_series().returning(|| Ok(vec![]));

        let repo = repository(local, online);
        assert_eq!(repo.get_favorite_movie_by_id(FavoriteId(42)).await, Ok(None));
        assert_eq!(repo.get_favorite_series().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_local_store_error_is_passed_through() {
        let failure = AppError::DatabaseError("connection refused".to_string());
        let returned = failure.clone();

        let mut local = MockLocalStore::new();
        local
            .expect_get_favorite_movies()
            .returning(move || Err(returned.clone()));

        let result = repository(local, MockOnlineSource::new())
            .get_favorite_movies()
            .await;
        assert_eq!(result, Err(failure));
    }
}
