// src/services/movie_service.rs
use std::sync::Arc;

use crate::domain::{
    find_by_title, find_by_title_exact, unique_genres, validate_movie, validate_title, Movie,
};
use crate::error::AppResult;
use crate::repositories::MovieRepository;

/// Orchestrates the reference catalog and the persisted one.
///
/// The reference set is owned, immutable ground truth for autofill, genre
/// options, and default rendering; only the persisted catalog ever changes.
pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
    reference: Vec<Movie>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieRepository>, reference: Vec<Movie>) -> Self {
        Self { repo, reference }
    }

    /// The read-only reference catalog.
    pub fn reference(&self) -> &[Movie] {
        &self.reference
    }

    /// Distinct genres of the reference catalog, in first-appearance order.
    pub fn genre_options(&self) -> Vec<String> {
        unique_genres(&self.reference)
    }

    /// Lookup behind the title input. The raw input is trimmed and matched
    /// case-insensitively; `None` tells the caller to clear the dependent
    /// form fields.
    pub fn autofill(&self, raw_title: &str) -> Option<&Movie> {
        find_by_title(&self.reference, raw_title.trim())
    }

    /// Submit path: append the reference movie named `title` to the
    /// persisted catalog and return it for display.
    ///
    /// The name is matched exactly as given, untrimmed, unlike `autofill`.
    /// An empty title is rejected before anything is read or written; an
    /// unknown title returns `Ok(None)` and writes nothing.
    pub fn add_from_reference(&self, title: &str) -> AppResult<Option<Movie>> {
        validate_title(title)?;

        let Some(movie) = find_by_title_exact(&self.reference, title) else {
            return Ok(None);
        };

        validate_movie(movie)?;
        self.repo.add_movie(movie)?;

        log::info!("Selected movie '{}' added to the catalog", movie.title);
        Ok(Some(movie.clone()))
    }

    /// Validated append for caller-constructed movies.
    pub fn add_movie(&self, movie: &Movie) -> AppResult<()> {
        validate_movie(movie)?;
        self.repo.add_movie(movie)
    }

    pub fn remove_movie(&self, title: &str) -> AppResult<()> {
        self.repo.remove_movie(title)
    }

    pub fn reset_movies(&self) -> AppResult<()> {
        self.repo.reset_movies()
    }

    /// Seed the persisted catalog with the reference set.
    pub fn initialize_defaults(&self) -> AppResult<()> {
        self.repo.initialize_movies(&self.reference)
    }

    pub fn set_movies(&self, movies: &[Movie]) -> AppResult<()> {
        self.repo.set_movies(movies)
    }

    pub fn get_movies(&self) -> AppResult<Option<Vec<Movie>>> {
        self.repo.get_movies()
    }

    /// Catalog to render: the persisted one when present, else a copy of
    /// the reference set.
    pub fn current_catalog(&self) -> AppResult<Vec<Movie>> {
        Ok(self
            .repo
            .get_movies()?
            .unwrap_or_else(|| self.reference.clone()))
    }
}
