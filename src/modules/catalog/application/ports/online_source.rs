use async_trait::async_trait;

use crate::modules::catalog::application::dto::{
    CountryProvidersDto, DiscoverMovieDto, GenreDto, MovieDetailsDto, PersonDto,
    PopularMovieDto, SerieDto, TrailerDto,
};
use crate::modules::catalog::domain::{RatingBody, TitleId, Token};
use crate::shared::errors::AppResult;

/// Port (interface) for the remote catalog service.
///
/// One method per catalog operation, returning remote shapes. Transport
/// concerns (rate limiting, retries, status handling) belong to the
/// implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnlineSource: Send + Sync {
    /// Request a fresh authentication token
    async fn get_token(&self) -> AppResult<Token>;

    async fn get_categories(&self) -> AppResult<Vec<GenreDto>>;

    async fn get_movies_by_category_id(&self, id: TitleId) -> AppResult<Vec<DiscoverMovieDto>>;

    async fn get_series_by_category_id(&self, id: TitleId) -> AppResult<Vec<SerieDto>>;

    async fn get_popular_movies(&self) -> AppResult<Vec<PopularMovieDto>>;

    async fn get_top_rated_movies(&self) -> AppResult<Vec<PopularMovieDto>>;

    async fn get_upcoming_movies(&self) -> AppResult<Vec<PopularMovieDto>>;

    async fn get_movie(&self, id: TitleId) -> AppResult<MovieDetailsDto>;

    async fn get_trailer_by_movie_id(&self, id: TitleId) -> AppResult<TrailerDto>;

    async fn get_trailer_by_series_id(&self, id: TitleId) -> AppResult<TrailerDto>;

    async fn get_providers_by_movie_id(&self, id: TitleId)
        -> AppResult<Vec<CountryProvidersDto>>;

    async fn get_providers_by_serie_id(&self, id: TitleId)
        -> AppResult<Vec<CountryProvidersDto>>;

    /// Submit a rating; the flag is the service's acknowledgement
    async fn add_rating(&self, id: TitleId, rating: RatingBody) -> AppResult<bool>;

    async fn get_popular_persons(&self) -> AppResult<Vec<PersonDto>>;
}
