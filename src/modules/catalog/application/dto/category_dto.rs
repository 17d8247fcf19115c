use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::TitleId;

/// Genre entry of `/genre/movie/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: TitleId,
    pub name: String,
}
