use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::TitleId;

/// TV listing shape (`/discover/tv`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerieDto {
    pub id: TitleId,
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
    #[serde(default)]
    pub origin_country: Option<Vec<String>>,
}
