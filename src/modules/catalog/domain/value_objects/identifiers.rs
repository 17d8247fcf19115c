use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Identifier of a movie, series, person or genre in the remote catalog.
///
/// Always within `0..=i32::MAX`; out-of-range values cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TitleId(u32);

impl TitleId {
    pub fn new(raw: i64) -> AppResult<Self> {
        Validator::validate_title_id(raw)?;
        Ok(Self(u32::try_from(raw)?))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for TitleId {
    type Error = AppError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        TitleId::new(raw)
    }
}

impl TryFrom<u32> for TitleId {
    type Error = AppError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        TitleId::new(i64::from(raw))
    }
}

impl From<TitleId> for i64 {
    fn from(id: TitleId) -> Self {
        i64::from(id.0)
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a favorite row in the local store (64-bit space).
///
/// Kept apart from `TitleId`: a favorite key can be built from a title id,
/// never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FavoriteId(pub i64);

impl FavoriteId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<TitleId> for FavoriteId {
    fn from(id: TitleId) -> Self {
        FavoriteId(i64::from(id))
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_id_accepts_valid_range() {
        assert_eq!(TitleId::new(0).unwrap().value(), 0);
        assert_eq!(TitleId::new(550).unwrap().value(), 550);
        assert_eq!(TitleId::try_from(u32::try_from(i32::MAX).unwrap()).unwrap().value(), i32::MAX as u32);
    }

    #[test]
    fn test_title_id_rejects_negative_and_out_of_range() {
        assert!(matches!(TitleId::new(-1), Err(AppError::ValidationError(_))));
        assert!(matches!(
            TitleId::new(i64::from(i32::MAX) + 1),
            Err(AppError::ValidationError(_))
        ));
        assert!(TitleId::try_from(u32::MAX).is_err());
    }

    #[test]
    fn test_title_id_serde_checks_range() {
        let id: TitleId = serde_json::from_str("27205").unwrap();
        assert_eq!(id.value(), 27205);
        assert!(serde_json::from_str::<TitleId>("-3").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "27205");
    }

    #[test]
    fn test_favorite_id_from_title_id() {
        let id = TitleId::new(603).unwrap();
        assert_eq!(FavoriteId::from(id), FavoriteId(603));
    }
}
