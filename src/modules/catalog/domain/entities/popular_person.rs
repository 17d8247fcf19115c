use serde::{Deserialize, Serialize};

use super::image::image_url;
use crate::modules::catalog::domain::value_objects::TitleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularPerson {
    pub id: TitleId,
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub popularity: f32,
    /// Titles of the works the person is best known for
    pub known_for: Vec<String>,
}

impl PopularPerson {
    pub fn profile_url(&self, size: &str) -> Option<String> {
        self.profile_path.as_deref().map(|path| image_url(size, path))
    }
}
