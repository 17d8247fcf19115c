use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use super::models::*;
use crate::log_debug;
use crate::modules::catalog::application::ports::LocalStore;
use crate::modules::catalog::domain::{FavoriteId, Movie, Serie, Token};
use crate::schema::{auth_tokens, favorite_movies, favorite_series};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;

/// PostgreSQL-backed local store
pub struct PostgresCatalogStore {
    db: Arc<Database>,
}

impl PostgresCatalogStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocalStore for PostgresCatalogStore {
    async fn save_token(&self, token: &Token) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let row = NewAuthToken::from_entity(token);

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("save_token");
            let mut conn = db.get_connection()?;
            diesel::insert_into(auth_tokens::table)
                .values(&row)
                .on_conflict(auth_tokens::slot)
                .do_update()
                .set(&row)
                .execute(&mut conn)?;
            LogContext::db_operation("upsert", "auth_tokens", Some(timer.finish()));
            Ok(())
        })
        .await?
    }

    async fn load_token(&self) -> AppResult<Option<Token>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<AuthTokenModel>> {
            let mut conn = db.get_connection()?;
            let m = auth_tokens::table
                .filter(auth_tokens::slot.eq(TOKEN_SLOT))
                .select(AuthTokenModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Token::from))
    }

    async fn insert_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let row = NewFavoriteMovie::from_entity(movie)?;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(favorite_movies::table)
                .values(&row)
                .on_conflict(favorite_movies::id)
                .do_update()
                .set(&row)
                .execute(&mut conn)?;
            log_debug!("Saved favorite movie {}", row.id);
            Ok(())
        })
        .await?
    }

    async fn get_favorite_movies(&self) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<FavoriteMovieModel>> {
            let mut conn = db.get_connection()?;
            let rows = favorite_movies::table
                .order(favorite_movies::id.asc())
                .select(FavoriteMovieModel::as_select())
                .load(&mut conn)?;
            Ok(rows)
        })
        .await??;

        models
            .into_iter()
            .map(FavoriteMovieModel::into_entity)
            .collect()
    }

    async fn delete_favorite_movie(&self, movie: &Movie) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = i64::from(movie.id);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(favorite_movies::table.filter(favorite_movies::id.eq(id)))
                .execute(&mut conn)?;
            log_debug!("Deleted {} favorite movie row(s) for id {}", deleted, id);
            Ok(())
        })
        .await?
    }

    async fn get_favorite_movie_by_id(&self, id: FavoriteId) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        let key = id.value();

        let model = task::spawn_blocking(move || -> AppResult<Option<FavoriteMovieModel>> {
            let mut conn = db.get_connection()?;
            let m = favorite_movies::table
                .filter(favorite_movies::id.eq(key))
                .select(FavoriteMovieModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(FavoriteMovieModel::into_entity).transpose()
    }

    async fn insert_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let row = NewFavoriteSerie::from_entity(serie)?;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(favorite_series::table)
                .values(&row)
                .on_conflict(favorite_series::id)
                .do_update()
                .set(&row)
                .execute(&mut conn)?;
            log_debug!("Saved favorite series {}", row.id);
            Ok(())
        })
        .await?
    }

    async fn get_favorite_series(&self) -> AppResult<Vec<Serie>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<FavoriteSerieModel>> {
            let mut conn = db.get_connection()?;
            let rows = favorite_series::table
                .order(favorite_series::id.asc())
                .select(FavoriteSerieModel::as_select())
                .load(&mut conn)?;
            Ok(rows)
        })
        .await??;

        models
            .into_iter()
            .map(FavoriteSerieModel::into_entity)
            .collect()
    }

    async fn delete_favorite_series(&self, serie: &Serie) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = i64::from(serie.id);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(favorite_series::table.filter(favorite_series::id.eq(id)))
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn get_favorite_series_by_id(&self, id: FavoriteId) -> AppResult<Option<Serie>> {
        let db = Arc::clone(&self.db);
        let key = id.value();

        let model = task::spawn_blocking(move || -> AppResult<Option<FavoriteSerieModel>> {
            let mut conn = db.get_connection()?;
            let m = favorite_series::table
                .filter(favorite_series::id.eq(key))
                .select(FavoriteSerieModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(FavoriteSerieModel::into_entity).transpose()
    }
}
