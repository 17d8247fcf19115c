/// Remote shapes and domain entities shared by the integration tests
use chrono::{Duration, NaiveDate, Utc};
use cinedex_lib::modules::catalog::application::dto::{
    CountryProvidersDto, DiscoverMovieDto, GenreDto, KnownForDto, MovieDetailsDto, PersonDto,
    PopularMovieDto, ProviderDto, SerieDto, TrailerDto, VideoDto,
};
use cinedex_lib::modules::catalog::domain::{Movie, Serie, TitleId, Token};

pub fn id(raw: i64) -> TitleId {
    TitleId::new(raw).unwrap()
}

pub fn token(value: &str) -> Token {
    Token::new(value, Some(Utc::now() + Duration::minutes(60)))
}

pub fn genre(raw_id: i64, name: &str) -> GenreDto {
    GenreDto {
        id: id(raw_id),
        name: name.to_string(),
    }
}

pub fn discover_movie(raw_id: i64, title: &str) -> DiscoverMovieDto {
    DiscoverMovieDto {
        id: id(raw_id),
        title: title.to_string(),
        original_title: Some(title.to_string()),
        original_language: Some("en".to_string()),
        overview: Some(format!("Overview of {}", title)),
        poster_path: Some(format!("/poster{}.jpg", raw_id)),
        backdrop_path: None,
        release_date: Some("1999-10-15".to_string()),
        vote_average: Some(8.4),
        vote_count: Some(1200),
        popularity: Some(61.4),
        genre_ids: Some(vec![18]),
        adult: Some(false),
    }
}

pub fn popular_movie(raw_id: i64, title: &str) -> PopularMovieDto {
    PopularMovieDto {
        id: id(raw_id),
        title: Some(title.to_string()),
        name: None,
        original_title: Some(title.to_string()),
        overview: Some(format!("Overview of {}", title)),
        poster_path: Some(format!("/poster{}.jpg", raw_id)),
        backdrop_path: None,
        release_date: Some("1999-10-15".to_string()),
        vote_average: Some(8.4),
        vote_count: Some(1200),
        popularity: Some(61.4),
        media_type: None,
    }
}

pub fn movie_details(raw_id: i64, title: &str) -> MovieDetailsDto {
    MovieDetailsDto {
        id: id(raw_id),
        title: title.to_string(),
        original_title: Some(title.to_string()),
        overview: Some(format!("Overview of {}", title)),
        tagline: Some("Mischief. Mayhem. Soap.".to_string()),
        poster_path: Some(format!("/poster{}.jpg", raw_id)),
        backdrop_path: None,
        release_date: Some("1999-10-15".to_string()),
        runtime: Some(139),
        status: Some("Released".to_string()),
        vote_average: Some(8.4),
        vote_count: Some(1200),
        popularity: Some(61.4),
        genres: Some(vec![genre(18, "Drama")]),
    }
}

pub fn serie_dto(raw_id: i64, name: &str) -> SerieDto {
    SerieDto {
        id: id(raw_id),
        name: name.to_string(),
        original_name: Some(name.to_string()),
        overview: None,
        poster_path: None,
        backdrop_path: None,
        first_air_date: Some("2008-01-20".to_string()),
        vote_average: Some(8.9),
        vote_count: Some(14000),
        popularity: Some(300.2),
        genre_ids: Some(vec![18, 80]),
        origin_country: Some(vec!["US".to_string()]),
    }
}

pub fn trailer_dto(raw_id: i64, keys: &[&str]) -> TrailerDto {
    TrailerDto {
        id: id(raw_id),
        results: keys
            .iter()
            .map(|key| VideoDto {
                iso_639_1: Some("en".to_string()),
                iso_3166_1: Some("US".to_string()),
                name: format!("Trailer {}", key),
                key: key.to_string(),
                site: "YouTube".to_string(),
                size: Some(1080),
                r#type: "Trailer".to_string(),
                official: true,
                published_at: None,
                id: None,
            })
            .collect(),
    }
}

pub fn country(code: &str) -> CountryProvidersDto {
    CountryProvidersDto {
        country_code: code.to_string(),
        link: Some(format!("https://www.themoviedb.org/movie/550/watch?locale={}", code)),
        flatrate: Some(vec![ProviderDto {
            provider_id: 8,
            provider_name: "Netflix".to_string(),
            logo_path: None,
            display_priority: Some(1),
        }]),
        rent: None,
        buy: None,
    }
}

pub fn person(raw_id: i64, name: &str) -> PersonDto {
    PersonDto {
        id: id(raw_id),
        name: name.to_string(),
        profile_path: None,
        known_for_department: Some("Acting".to_string()),
        popularity: Some(20.0),
        known_for: vec![KnownForDto {
            id: Some(550),
            title: Some("Fight Club".to_string()),
            name: None,
            media_type: Some("movie".to_string()),
        }],
    }
}

pub fn movie(raw_id: i64, title: &str) -> Movie {
    Movie {
        id: id(raw_id),
        title: title.to_string(),
        original_title: None,
        overview: None,
        poster_path: None,
        backdrop_path: None,
        release_date: NaiveDate::from_ymd_opt(1994, 9, 23),
        vote_average: 8.7,
        vote_count: 26000,
        popularity: 90.1,
    }
}

pub fn serie(raw_id: i64, name: &str) -> Serie {
    Serie {
        id: id(raw_id),
        name: name.to_string(),
        original_name: None,
        overview: None,
        poster_path: None,
        backdrop_path: None,
        first_air_date: None,
        vote_average: 0.0,
        vote_count: 0,
        popularity: 0.0,
    }
}
