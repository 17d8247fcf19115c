use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::image::image_url;
use crate::modules::catalog::domain::value_objects::TitleId;

/// A movie, either a transient listing result or a stored favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: TitleId,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub popularity: f32,
}

impl Movie {
    pub fn poster_url(&self, size: &str) -> Option<String> {
        self.poster_path.as_deref().map(|path| image_url(size, path))
    }

    pub fn backdrop_url(&self, size: &str) -> Option<String> {
        self.backdrop_path.as_deref().map(|path| image_url(size, path))
    }
}
