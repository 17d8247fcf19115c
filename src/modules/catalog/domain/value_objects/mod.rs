pub mod identifiers;
pub mod rating;

pub use identifiers::{FavoriteId, TitleId};
pub use rating::RatingBody;
