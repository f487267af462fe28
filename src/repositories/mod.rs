// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Whole-collection reads and writes only

pub mod movie_repository;

pub use movie_repository::{KvMovieRepository, MovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
