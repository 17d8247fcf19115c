use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::TitleId;

/// Genre used to browse the catalog. Produced fresh per fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: TitleId,
    pub name: String,
}
