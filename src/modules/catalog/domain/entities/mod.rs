pub mod category;
pub mod country_result;
pub mod image;
pub mod movie;
pub mod popular_person;
pub mod serie;
pub mod token;
pub mod trailer;

pub use category::Category;
pub use country_result::{CountryResult, WatchProvider};
pub use movie::Movie;
pub use popular_person::PopularPerson;
pub use serie::Serie;
pub use token::Token;
pub use trailer::Trailer;
