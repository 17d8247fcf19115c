use serde::{Deserialize, Serialize};

use super::category_dto::GenreDto;
use crate::modules::catalog::domain::TitleId;

// Three remote movie shapes. All of them map onto the same domain `Movie`.

/// Standard listing shape (`/discover/movie`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoverMovieDto {
    pub id: TitleId,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub adult: Option<bool>,
}

/// Popular / top rated / upcoming / trending shape.
///
/// Trending results may carry `name` instead of `title`, plus a `media_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularMovieDto {
    pub id: TitleId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// Detail shape (`/movie/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailsDto {
    pub id: TitleId,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>, // "Released", "Post Production", ...
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub genres: Option<Vec<GenreDto>>,
}
