use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Rating submitted for a title. Sent to the remote catalog, never stored locally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBody {
    value: f32,
}

impl RatingBody {
    pub fn new(value: f32) -> AppResult<Self> {
        Validator::validate_rating(value)?;
        Ok(Self { value })
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}
