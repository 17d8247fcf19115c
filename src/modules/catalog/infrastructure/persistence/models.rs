use crate::modules::catalog::domain::{Movie, Serie, TitleId, Token};
use crate::schema::{auth_tokens, favorite_movies, favorite_series};
use crate::shared::errors::AppResult;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// The token table holds exactly one row
pub const TOKEN_SLOT: i32 = 1;

// ============= TOKEN =============

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = auth_tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthTokenModel {
    pub slot: i32,
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = auth_tokens, primary_key(slot))]
#[diesel(treat_none_as_null = true)]
pub struct NewAuthToken {
    pub slot: i32,
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub saved_at: DateTime<Utc>,
}

impl NewAuthToken {
    pub fn from_entity(token: &Token) -> Self {
        Self {
            slot: TOKEN_SLOT,
            value: token.value.clone(),
            expires_at: token.expires_at,
            saved_at: Utc::now(),
        }
    }
}

impl From<AuthTokenModel> for Token {
    fn from(model: AuthTokenModel) -> Self {
        Token::new(model.value, model.expires_at)
    }
}

// ============= FAVORITE MOVIES =============

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = favorite_movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FavoriteMovieModel {
    pub id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: i32,
    pub popularity: f32,
    pub added_at: DateTime<Utc>,
}

// Insert and upsert share the same column set; `added_at` keeps its first value
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = favorite_movies)]
#[diesel(treat_none_as_null = true)]
pub struct NewFavoriteMovie {
    pub id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: i32,
    pub popularity: f32,
}

impl NewFavoriteMovie {
    pub fn from_entity(movie: &Movie) -> AppResult<Self> {
        Ok(Self {
            id: i64::from(movie.id),
            title: movie.title.clone(),
            original_title: movie.original_title.clone(),
            overview: movie.overview.clone(),
            poster_path: movie.poster_path.clone(),
            backdrop_path: movie.backdrop_path.clone(),
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            vote_count: i32::try_from(movie.vote_count)?,
            popularity: movie.popularity,
        })
    }
}

impl FavoriteMovieModel {
    pub fn into_entity(self) -> AppResult<Movie> {
        Ok(Movie {
            id: TitleId::new(self.id)?,
            title: self.title,
            original_title: self.original_title,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            release_date: self.release_date,
            vote_average: self.vote_average,
            vote_count: u32::try_from(self.vote_count).unwrap_or_default(),
            popularity: self.popularity,
        })
    }
}

// ============= FAVORITE SERIES =============

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = favorite_series)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FavoriteSerieModel {
    pub id: i64,
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: i32,
    pub popularity: f32,
    pub added_at: DateTime<Utc>,
}

#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = favorite_series)]
#[diesel(treat_none_as_null = true)]
pub struct NewFavoriteSerie {
    pub id: i64,
    pub name: String,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<NaiveDate>,
    pub vote_average: f32,
    pub vote_count: i32,
    pub popularity: f32,
}

impl NewFavoriteSerie {
    pub fn from_entity(serie: &Serie) -> AppResult<Self> {
        Ok(Self {
            id: i64::from(serie.id),
            name: serie.name.clone(),
            original_name: serie.original_name.clone(),
            overview: serie.overview.clone(),
            poster_path: serie.poster_path.clone(),
            backdrop_path: serie.backdrop_path.clone(),
            first_air_date: serie.first_air_date,
            vote_average: serie.vote_average,
            vote_count: i32::try_from(serie.vote_count)?,
            popularity: serie.popularity,
        })
    }
}

impl FavoriteSerieModel {
    pub fn into_entity(self) -> AppResult<Serie> {
        Ok(Serie {
            id: TitleId::new(self.id)?,
            name: self.name,
            original_name: self.original_name,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            first_air_date: self.first_air_date,
            vote_average: self.vote_average,
            vote_count: u32::try_from(self.vote_count).unwrap_or_default(),
            popularity: self.popularity,
        })
    }
}
