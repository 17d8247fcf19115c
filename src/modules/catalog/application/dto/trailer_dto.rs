use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::TitleId;

/// Videos of a movie or series (`/movie/{id}/videos`, `/tv/{id}/videos`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerDto {
    pub id: TitleId,
    #[serde(default)]
    pub results: Vec<VideoDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDto {
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    pub name: String,
    pub key: String,    // YouTube video ID
    pub site: String,   // "YouTube"
    #[serde(default)]
    pub size: Option<u32>,
    pub r#type: String, // "Trailer", "Teaser", "Clip", "Featurette", ...
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
