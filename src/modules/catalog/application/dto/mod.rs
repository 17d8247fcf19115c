//! Shapes returned by the online source, before mapping to domain entities

pub mod category_dto;
pub mod movie_dto;
pub mod person_dto;
pub mod provider_dto;
pub mod serie_dto;
pub mod trailer_dto;

pub use category_dto::GenreDto;
pub use movie_dto::{DiscoverMovieDto, MovieDetailsDto, PopularMovieDto};
pub use person_dto::{KnownForDto, PersonDto};
pub use provider_dto::{CountryProvidersDto, ProviderDto};
pub use serie_dto::SerieDto;
pub use trailer_dto::{TrailerDto, VideoDto};
