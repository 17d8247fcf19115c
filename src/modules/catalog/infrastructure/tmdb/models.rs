//! TMDB response envelopes. Item shapes live in `application::dto`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::catalog::application::dto::{CountryProvidersDto, GenreDto, ProviderDto};

/// Paged listing (`/discover/*`, `/movie/popular`, `/person/popular`, ...)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PagedResponse<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// `/genre/movie/list`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenresResponse {
    #[serde(default)]
    pub genres: Vec<GenreDto>,
}

/// `/authentication/token/new`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    /// e.g. "2016-08-26 17:04:39 UTC"
    #[serde(default)]
    pub expires_at: Option<String>,
    pub request_token: String,
}

/// `/movie/{id}/watch/providers`, `/tv/{id}/watch/providers`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub id: Option<i64>,
    /// Keyed by ISO 3166-1 country code
    #[serde(default)]
    pub results: BTreeMap<String, CountryEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryEntry {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderDto>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderDto>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderDto>>,
}

impl WatchProvidersResponse {
    /// One entry per country, ordered by country code
    pub fn into_countries(self) -> Vec<CountryProvidersDto> {
        self.results
            .into_iter()
            .map(|(country_code, entry)| CountryProvidersDto {
                country_code,
                link: entry.link,
                flatrate: entry.flatrate,
                rent: entry.rent,
                buy: entry.buy,
            })
            .collect()
    }
}

/// Acknowledgement of `POST /movie/{id}/rating`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatingResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl RatingResponse {
    /// 1 = created, 12 = updated
    pub fn accepted(&self) -> bool {
        self.success
            .unwrap_or_else(|| matches!(self.status_code, Some(1) | Some(12)))
    }
}
