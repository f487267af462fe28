// src/repositories/movie_repository.rs
//
// Movie catalog persistence over the key-value store

use std::sync::Arc;

use crate::domain::Movie;
use crate::error::AppResult;
use crate::infrastructure::{get_json, set_json, KeyValueStore};

/// Storage key holding the whole persisted catalog.
const MOVIES_KEY: &str = "movies";

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// The persisted catalog, or `None` when never initialized or reset.
    fn get_movies(&self) -> AppResult<Option<Vec<Movie>>>;

    /// Whole-collection replace; overwrites any prior persisted catalog.
    fn set_movies(&self, movies: &[Movie]) -> AppResult<()>;

    /// First-run seeding; the same write as `set_movies`.
    fn initialize_movies(&self, movies: &[Movie]) -> AppResult<()>;

    /// Append one movie at the end; an absent catalog starts as empty.
    fn add_movie(&self, movie: &Movie) -> AppResult<()>;

    /// Remove every movie whose title equals `title` exactly, case included.
    fn remove_movie(&self, title: &str) -> AppResult<()>;

    /// Delete the persisted catalog key entirely.
    fn reset_movies(&self) -> AppResult<()>;
}

pub struct KvMovieRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvMovieRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current catalog with corrupt stored text collapsed to `None`.
    ///
    /// The store reports corruption as its own state and has already logged
    /// it; from here up it reads as the seed case, and the next whole
    /// collection write overwrites the bad text.
    fn read_catalog(&self) -> AppResult<Option<Vec<Movie>>> {
        Ok(get_json::<Vec<Movie>>(self.store.as_ref(), MOVIES_KEY)?.found())
    }
}

impl MovieRepository for KvMovieRepository {
    fn get_movies(&self) -> AppResult<Option<Vec<Movie>>> {
        self.read_catalog()
    }

    fn set_movies(&self, movies: &[Movie]) -> AppResult<()> {
        set_json(self.store.as_ref(), MOVIES_KEY, &movies)
    }

    fn initialize_movies(&self, movies: &[Movie]) -> AppResult<()> {
        self.set_movies(movies)
    }

    fn add_movie(&self, movie: &Movie) -> AppResult<()> {
        // Read-modify-write over the whole collection. Not atomic across
        // concurrent writers; last write wins.
        let mut movies = self.read_catalog()?.unwrap_or_default();
        movies.push(movie.clone());
        self.set_movies(&movies)
    }

    fn remove_movie(&self, title: &str) -> AppResult<()> {
        // Exact match, case included. Title lookup for autofill folds case;
        // removal does not. Keep the asymmetry.
        let mut movies = self.read_catalog()?.unwrap_or_default();
        movies.retain(|m| m.title != title);
        self.set_movies(&movies)
    }

    fn reset_movies(&self) -> AppResult<()> {
        self.store.remove_item(MOVIES_KEY)
    }
}
