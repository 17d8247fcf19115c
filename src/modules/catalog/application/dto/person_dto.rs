use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::TitleId;

/// Entry of `/person/popular`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: TitleId,
    pub name: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub known_for: Vec<KnownForDto>,
}

/// Movie (`title`) or TV (`name`) credit of a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownForDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
}
