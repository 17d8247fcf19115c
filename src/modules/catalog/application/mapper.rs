use chrono::NaiveDate;

use super::dto::{
    CountryProvidersDto, DiscoverMovieDto, GenreDto, MovieDetailsDto, PersonDto,
    PopularMovieDto, ProviderDto, SerieDto, TrailerDto, VideoDto,
};
use crate::modules::catalog::domain::{
    Category, CountryResult, Movie, PopularPerson, Serie, Trailer, WatchProvider,
};

/// Pure conversions from online-source shapes to domain entities.
///
/// Every function is total: missing optional fields fall back to empty or
/// zero values and malformed dates become `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogMapper;

impl CatalogMapper {
    pub fn to_category(dto: GenreDto) -> Category {
        Category {
            id: dto.id,
            name: dto.name,
        }
    }

    /// Standard listing shape
    pub fn to_movie(dto: DiscoverMovieDto) -> Movie {
        Movie {
            id: dto.id,
            title: dto.title,
            original_title: dto.original_title,
            overview: Self::non_empty(dto.overview),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            release_date: Self::parse_date(dto.release_date.as_deref()),
            vote_average: dto.vote_average.unwrap_or_default(),
            vote_count: dto.vote_count.unwrap_or_default(),
            popularity: dto.popularity.unwrap_or_default(),
        }
    }

    /// Popular / top rated / upcoming / trending shape
    pub fn popular_to_movie(dto: PopularMovieDto) -> Movie {
        let title = dto
            .title
            .or(dto.name)
            .or_else(|| dto.original_title.clone())
            .unwrap_or_default();

        Movie {
            id: dto.id,
            title,
            original_title: dto.original_title,
            overview: Self::non_empty(dto.overview),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            release_date: Self::parse_date(dto.release_date.as_deref()),
            vote_average: dto.vote_average.unwrap_or_default(),
            vote_count: dto.vote_count.unwrap_or_default(),
            popularity: dto.popularity.unwrap_or_default(),
        }
    }

    /// Detail shape of a single movie
    pub fn details_to_movie(dto: MovieDetailsDto) -> Movie {
        Movie {
            id: dto.id,
            title: dto.title,
            original_title: dto.original_title,
            overview: Self::non_empty(dto.overview),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            release_date: Self::parse_date(dto.release_date.as_deref()),
            vote_average: dto.vote_average.unwrap_or_default(),
            vote_count: dto.vote_count.unwrap_or_default(),
            popularity: dto.popularity.unwrap_or_default(),
        }
    }

    pub fn to_serie(dto: SerieDto) -> Serie {
        Serie {
            id: dto.id,
            name: dto.name,
            original_name: dto.original_name,
            overview: Self::non_empty(dto.overview),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            first_air_date: Self::parse_date(dto.first_air_date.as_deref()),
            vote_average: dto.vote_average.unwrap_or_default(),
            vote_count: dto.vote_count.unwrap_or_default(),
            popularity: dto.popularity.unwrap_or_default(),
        }
    }

    /// Picks the most relevant video: an official YouTube trailer, then any
    /// YouTube trailer, then any YouTube video, then whatever comes first.
    pub fn to_trailer(dto: TrailerDto) -> Trailer {
        let best = Self::pick_trailer(&dto.results);

        Trailer {
            id: dto.id,
            key: best.map(|v| v.key.clone()),
            name: best.map(|v| v.name.clone()),
            site: best.map(|v| v.site.clone()),
        }
    }

    pub fn to_country_result(dto: CountryProvidersDto) -> CountryResult {
        CountryResult {
            country_code: dto.country_code,
            link: dto.link,
            streaming: Self::map_providers(dto.flatrate),
            rent: Self::map_providers(dto.rent),
            buy: Self::map_providers(dto.buy),
        }
    }

    pub fn to_popular_person(dto: PersonDto) -> PopularPerson {
        let known_for = dto
            .known_for
            .into_iter()
            .filter_map(|credit| credit.title.or(credit.name))
            .collect();

        PopularPerson {
            id: dto.id,
            name: dto.name,
            profile_path: dto.profile_path,
            known_for_department: dto.known_for_department,
            popularity: dto.popularity.unwrap_or_default(),
            known_for,
        }
    }

    fn pick_trailer(videos: &[VideoDto]) -> Option<&VideoDto> {
        let youtube = |v: &&VideoDto| v.site == "YouTube";
        let trailer = |v: &&VideoDto| v.r#type == "Trailer";

        videos
            .iter()
            .filter(youtube)
            .find(|v| trailer(v) && v.official)
            .or_else(|| videos.iter().filter(youtube).find(trailer))
            .or_else(|| videos.iter().find(youtube))
            .or_else(|| videos.first())
    }

    fn map_providers(providers: Option<Vec<ProviderDto>>) -> Vec<WatchProvider> {
        let mut mapped: Vec<WatchProvider> = providers
            .unwrap_or_default()
            .into_iter()
            .map(|p| WatchProvider {
                id: p.provider_id,
                name: p.provider_name,
                logo_path: p.logo_path,
                display_priority: p.display_priority.unwrap_or(u32::MAX),
            })
            .collect();
        // stable: equal priorities keep TMDB order
        mapped.sort_by_key(|p| p.display_priority);
        mapped
    }

    /// Parse TMDB `YYYY-MM-DD` dates; TMDB sends "" for unknown dates
    fn parse_date(date_str: Option<&str>) -> Option<NaiveDate> {
        date_str
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    fn non_empty(text: Option<String>) -> Option<String> {
        text.filter(|s| !s.trim().is_empty())
    }
}
