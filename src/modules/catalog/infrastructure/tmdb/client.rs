use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;
use tracing::{debug, info};

use super::models::*;
use crate::modules::catalog::application::dto::{
    CountryProvidersDto, DiscoverMovieDto, GenreDto, MovieDetailsDto, PersonDto,
    PopularMovieDto, SerieDto, TrailerDto,
};
use crate::modules::catalog::application::ports::OnlineSource;
use crate::modules::catalog::domain::{RatingBody, TitleId, Token};
use crate::modules::catalog::infrastructure::http_client::RateLimitClient;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use std::time::Instant;

/// TMDB v3 REST implementation of the online source
pub struct TmdbCatalogSource {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
    language: String,
    guest_session_id: Option<String>,
}

impl TmdbCatalogSource {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_client(RateLimitClient::for_tmdb(), config)
    }

    /// Create source with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, config: &CatalogConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            guest_session_id: config.guest_session_id.clone(),
        }
    }

    /// Build URL with API key parameter
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}?api_key={}", self.base_url, endpoint, self.api_key)
    }

    /// Build URL with API key and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = self.build_url(endpoint);
        for (key, value) in params {
            if *key != "api_key" {
                url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
            }
        }
        url
    }

    /// Localized catalog URL (`language` plus extra params)
    fn catalog_url(&self, endpoint: &str, extra: &[(&str, String)]) -> String {
        let mut params = vec![("language", self.language.clone())];
        params.extend(extra.iter().cloned());
        self.build_url_with_params(endpoint, &params)
    }

    async fn first_page<T>(&self, endpoint: &str, extra: &[(&str, String)]) -> AppResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut params = vec![("page", "1".to_string())];
        params.extend(extra.iter().cloned());
        let url = self.catalog_url(endpoint, &params);

        LogContext::api_call("TMDB", endpoint, "started", None);
        let timer = Instant::now();
        let page: PagedResponse<T> = match self.http_client.get(&url).await {
            Ok(page) => page,
            Err(e) => {
                LogContext::api_call("TMDB", endpoint, "failed", Some(elapsed_ms(timer)));
                return Err(e);
            }
        };
        LogContext::api_call("TMDB", endpoint, "ok", Some(elapsed_ms(timer)));
        debug!(
            "TMDB: {} returned {} results (page {}/{})",
            endpoint,
            page.results.len(),
            page.page,
            page.total_pages
        );
        Ok(page.results)
    }

    async fn watch_providers(&self, endpoint: &str) -> AppResult<Vec<CountryProvidersDto>> {
        let url = self.build_url(endpoint);
        let response: WatchProvidersResponse = self.http_client.get(&url).await?;
        Ok(response.into_countries())
    }

    /// TMDB sends token expiry as "YYYY-MM-DD HH:MM:SS UTC"
    pub(crate) fn parse_expiry(raw: &str) -> AppResult<DateTime<Utc>> {
        let trimmed = raw.trim().trim_end_matches("UTC").trim_end();
        let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")?;
        Ok(naive.and_utc())
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[async_trait]
impl OnlineSource for TmdbCatalogSource {
    async fn get_token(&self) -> AppResult<Token> {
        let url = self.build_url("/authentication/token/new");
        let response: TokenResponse = self.http_client.get(&url).await?;

        if !response.success {
            return Err(AppError::ApiError(
                "TMDB refused to issue a request token".to_string(),
            ));
        }

        let expires_at = response
            .expires_at
            .as_deref()
            .map(Self::parse_expiry)
            .transpose()?;

        info!("TMDB: Issued request token (expires at {:?})", expires_at);
        Ok(Token::new(response.request_token, expires_at))
    }

    async fn get_categories(&self) -> AppResult<Vec<GenreDto>> {
        let url = self.catalog_url("/genre/movie/list", &[]);
        let response: GenresResponse = self.http_client.get(&url).await?;
        Ok(response.genres)
    }

    async fn get_movies_by_category_id(&self, id: TitleId) -> AppResult<Vec<DiscoverMovieDto>> {
        self.first_page("/discover/movie", &[("with_genres", id.to_string())])
            .await
    }

    async fn get_series_by_category_id(&self, id: TitleId) -> AppResult<Vec<SerieDto>> {
        self.first_page("/discover/tv", &[("with_genres", id.to_string())])
            .await
    }

    async fn get_popular_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.first_page("/movie/popular", &[]).await
    }

    async fn get_top_rated_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.first_page("/movie/top_rated", &[]).await
    }

    async fn get_upcoming_movies(&self) -> AppResult<Vec<PopularMovieDto>> {
        self.first_page("/movie/upcoming", &[]).await
    }

    async fn get_movie(&self, id: TitleId) -> AppResult<MovieDetailsDto> {
        let url = self.catalog_url(&format!("/movie/{}", id), &[]);
        self.http_client.get(&url).await
    }

    async fn get_trailer_by_movie_id(&self, id: TitleId) -> AppResult<TrailerDto> {
        let url = self.catalog_url(&format!("/movie/{}/videos", id), &[]);
        self.http_client.get(&url).await
    }

    async fn get_trailer_by_series_id(&self, id: TitleId) -> AppResult<TrailerDto> {
        let url = self.catalog_url(&format!("/tv/{}/videos", id), &[]);
        self.http_client.get(&url).await
    }

    async fn get_providers_by_movie_id(
        &self,
        id: TitleId,
    ) -> AppResult<Vec<CountryProvidersDto>> {
        self.watch_providers(&format!("/movie/{}/watch/providers", id))
            .await
    }

    async fn get_providers_by_serie_id(
        &self,
        id: TitleId,
    ) -> AppResult<Vec<CountryProvidersDto>> {
        self.watch_providers(&format!("/tv/{}/watch/providers", id))
            .await
    }

    async fn add_rating(&self, id: TitleId, rating: RatingBody) -> AppResult<bool> {
        let session = self.guest_session_id.as_deref().ok_or_else(|| {
            AppError::Unauthorized(
                "Rating requires a TMDB guest session (TMDB_GUEST_SESSION_ID)".to_string(),
            )
        })?;

        let url = self.build_url_with_params(
            &format!("/movie/{}/rating", id),
            &[("guest_session_id", session.to_string())],
        );
        let response: RatingResponse = self
            .http_client
            .post_json(&url, &json!({ "value": rating.value() }))
            .await?;

        info!(
            "TMDB: Rated movie {} with {} ({:?})",
            id,
            rating.value(),
            response.status_message
        );
        Ok(response.accepted())
    }

    async fn get_popular_persons(&self) -> AppResult<Vec<PersonDto>> {
        self.first_page("/person/popular", &[]).await
    }
}
