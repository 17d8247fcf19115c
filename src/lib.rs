pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::catalog::{
    application::{LocalStore, MovieRepository, OnlineSource},
    infrastructure::{InMemoryCatalogStore, PostgresCatalogStore, TmdbCatalogSource},
};
use shared::{
    errors::AppResult,
    utils::logger::{init_logger, TimedOperation},
    CatalogConfig, Database,
};

/// Wire the TMDB source and a local store into a repository.
///
/// With `database_url` set, favorites and the token live in PostgreSQL
/// (migrations are applied first); otherwise they are kept in memory.
pub async fn bootstrap(config: CatalogConfig) -> AppResult<MovieRepository> {
    init_logger();
    config.validate()?;

    let timer = TimedOperation::new("bootstrap");

    let local: Arc<dyn LocalStore> = match config.database_url.as_deref() {
        Some(url) => {
            let url = url.to_string();
            let database = tokio::task::spawn_blocking(move || -> AppResult<Database> {
                let database = Database::new(&url)?;
                database.run_migrations()?;
                Ok(database)
            })
            .await??;
            Arc::new(PostgresCatalogStore::new(Arc::new(database)))
        }
        None => {
            log::info!("No DATABASE_URL configured, favorites are kept in memory");
            Arc::new(InMemoryCatalogStore::new())
        }
    };

    let online: Arc<dyn OnlineSource> = Arc::new(TmdbCatalogSource::new(&config));

    timer.finish_with_info(&format!("token policy {:?}", config.token_persistence));
    Ok(MovieRepository::new(local, online).with_token_policy(config.token_persistence))
}

/// `bootstrap` with configuration read from the environment
pub async fn bootstrap_from_env() -> AppResult<MovieRepository> {
    bootstrap(CatalogConfig::from_env()?).await
}
