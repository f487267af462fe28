// src/application/state.rs

use std::path::PathBuf;
use std::sync::Arc;

use crate::dataset;
use crate::db::{create_connection_pool, get_database_path, initialize_database};
use crate::error::AppResult;
use crate::infrastructure::SqliteKeyValueStore;
use crate::repositories::{KvMovieRepository, MovieRepository};
use crate::services::MovieService;

/// Startup configuration.
///
/// `database_path: None` falls back to the platform data directory.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
}

/// Application state shared with the shell.
/// Built once at startup, held for the session lifetime; no teardown
/// beyond drop.
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    pub fn initialize(config: AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let db_path = match config.database_path {
            Some(path) => path,
            None => get_database_path()?,
        };
        let pool = Arc::new(create_connection_pool(&db_path)?);

        // Initialize schema (idempotent)
        {
            let conn = pool.get()?;
            initialize_database(&conn)?;
        }

        // 2. REPOSITORIES
        let store = Arc::new(SqliteKeyValueStore::new(pool.clone()));
        let movie_repo: Arc<dyn MovieRepository> = Arc::new(KvMovieRepository::new(store));

        // 3. SERVICES
        let movie_service = Arc::new(MovieService::new(movie_repo, dataset::default_catalog()?));

        log::info!("Application state ready (database: {})", db_path.display());

        Ok(AppState { movie_service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopening_the_same_database_shares_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            database_path: Some(dir.path().join("movies.db")),
        };

        let first = AppState::initialize(config.clone()).unwrap();
        first.movie_service.add_from_reference("Barbie").unwrap();

        let second = AppState::initialize(config).unwrap();
        let movies = second.movie_service.get_movies().unwrap().unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Barbie");
    }

    #[test]
    fn test_initialized_service_carries_the_bundled_reference() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::initialize(AppConfig {
            database_path: Some(dir.path().join("movies.db")),
        })
        .unwrap();

        assert!(!state.movie_service.reference().is_empty());
        assert!(state.movie_service.autofill("barbie").is_some());
    }
}
