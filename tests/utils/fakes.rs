/// Recording collaborators for repository tests
use async_trait::async_trait;
use cinedex_lib::modules::catalog::application::dto::{
    CountryProvidersDto, DiscoverMovieDto, GenreDto, MovieDetailsDto, PersonDto,
    PopularMovieDto, SerieDto, TrailerDto,
};
use cinedex_lib::modules::catalog::application::{LocalStore, OnlineSource};
use cinedex_lib::modules::catalog::domain::{FavoriteId, Movie, RatingBody, Serie, TitleId, Token};
use cinedex_lib::modules::catalog::infrastructure::InMemoryCatalogStore;
use cinedex_lib::shared::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// Online source returning canned payloads, or `failure` for every call
#[derive(Default)]
pub struct FakeOnlineSource {
    pub failure: Option<AppError>,
    pub token: Option<Token>,
    pub genres: Vec<GenreDto>,
    pub discover: Vec<DiscoverMovieDto>,
    pub series: Vec<SerieDto>,
    pub popular: Vec<PopularMovieDto>,
    pub details: Option<MovieDetailsDto>,
    pub trailer: Option<TrailerDto>,
    pub providers: Vec<CountryProvidersDto>,
    pub persons: Vec<PersonDto>,
    pub rating_ack: bool,
    pub calls: Arc<Mutex<usize>>,
    pub last_id: Arc<Mutex<Option<TitleId>>>,
}

impl FakeOnlineSource {
    pub fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn last_id(&self) -> Option<TitleId> {
        *self.last_id.lock().unwrap()
    }

    fn respond<T>(&self, id: Option<TitleId>, payload: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
        *self.calls.lock().unwrap() += 1;
        if id.is_some() {
            *self.last_id.lock().unwrap() = id;
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => payload(),
        }
    }

    fn missing(what: &str) -> AppError {
        AppError::NotFound(format!("no {} configured", what))
    }
}

#[async_trait]
impl OnlineSource for FakeOnlineSource {
    async fn get_token(&self) -> AppResult<Token> {
        self.respond(None, || self.token.clone().ok_or_else(|| Self::missing("token")))
    }

    async fn get_categories(&self) -> AppResult<Vec<GenreDto>> {
        self.respond(None, || Ok(self.genres.clone()))
    }

    async fn get_movies_by_category_id(&self, id: TitleId) -> AppResult<Vec<DiscoverMovieDto>> {
        self.respond(Some(id), || Ok(self.discover.clone()))
    }

    async fn get_series_by_category_id(&self, id: TitleId) -> AppResult<Vec<SerieDto>> {
        self.respond(Some(id), || Ok(self.series.clone()))
    }

    async fn get_popular_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.respond(None, || Ok(self.popular.clone()))
    }

    async fn get_top_rated_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.respond(None, || Ok(self.popular.clone()))
    }

    async fn get_upcoming_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.respond(None, || Ok(self.popular.clone()))
    }

    async fn get_movie(&self, id: TitleId) -> AppResult<MovieDetailsDto> {
        self.respond(Some(id), || {
            self.details.clone().ok_or_else(|| Self::missing("movie details"))
        })
    }

    async fn get_trailer_by_movie_id(&self, id: TitleId) -> AppResult<TrailerDto> {
        self.respond(Some(id), || self.trailer.clone().ok_or_else(|| Self::missing("trailer")))
    }

    async fn get_trailer_by_series_id(&self, id: TitleId) -> AppResult<TrailerDto> {
        self.respond(Some(id), || self.trailer.clone().ok_or_else(|| Self::missing("trailer")))
    }

    async fn get_providers_by_movie_id(&self, id: TitleId) -> AppResult<Vec<CountryProvidersDto>> {
        self.respond(Some(id), || Ok(self.providers.clone()))
    }

    async fn get_providers_by_serie_id(&self, id: TitleId) -> AppResult<Vec<CountryProvidersDto>> {
        self.respond(Some(id), || Ok(self.providers.clone()))
    }

    async fn add_rating(&self, id: TitleId, _rating: RatingBody) -> AppResult<bool> {
        self.respond(Some(id), || Ok(self.rating_ack))
    }

    async fn get_popular_persons(&self) -> AppResult<Vec<PersonDto>> {
        self.respond(None, || Ok(self.persons.clone()))
    }
}

/// In-memory store that records token writes and can be made to fail
#[derive(Default)]
pub struct RecordingLocalStore {
    inner: InMemoryCatalogStore,
    pub failure: Option<AppError>,
    pub saved_tokens: Arc<Mutex<Vec<Token>>>,
    pub calls: Arc<Mutex<usize>>,
}

impl RecordingLocalStore {
    pub fn failing(error: AppError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn saved_tokens(&self) -> Vec<Token> {
        self.saved_tokens.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn check(&self) -> AppResult<()> {
        *self.calls.lock().unwrap() += 1;
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LocalStore for RecordingLocalStore {
    async fn save_token(&self, token: &Token) -> AppResult<()> {
        self.saved_tokens.lock().unwrap().push(token.clone());
        self.check()?;
        self.inner.save_token(token).await
    }

    async fn load_token(&self) -> AppResult<Option<Token>> {
        self.check()?;
        self.inner.load_token().await
    }

    async fn insert_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        self.check()?;
        self.inner.insert_favorite_movie(movie).await
    }

    async fn get_favorite_movies(&self) -> AppResult<Vec<Movie>> {
        self.check()?;
        self.inner.get_favorite_movies().await
    }

    async fn delete_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        self.check()?;
        self.inner.delete_favorite_movie(movie).await
    }

    async fn get_favorite_movie_by_id(&self, id: FavoriteId) -> AppResult<Option<Movie>> {
        self.check()?;
        self.inner.get_favorite_movie_by_id(id).await
    }

    async fn insert_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        self.check()?;
        self.inner.insert_favorite_series(serie).await
    }

    async fn get_favorite_series(&self) -> AppResult<Vec<Serie>> {
        self.check()?;
        self.inner.get_favorite_series().await
    }

    async fn delete_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        self.check()?;
        self.inner.delete_favorite_series(serie).await
    }

    async fn get_favorite_series_by_id(&self, id: FavoriteId) -> AppResult<Option<Serie>> {
        self.check()?;
        self.inner.get_favorite_series_by_id(id).await
    }
}
