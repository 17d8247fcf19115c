use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::image::image_url;
use crate::modules::catalog::domain::value_objects::TitleId;

/// A TV series, either a transient listing result or a stored favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serie {
    pub id: TitleId,
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub popularity: f32,
}

impl Serie {
    pub fn poster_url(&self, size: &str) -> Option<String> {
        self.poster_path.as_deref().map(|path| image_url(size, path))
    }
}
