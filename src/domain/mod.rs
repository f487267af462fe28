// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{validate_movie, validate_title, Movie};

// Catalog Queries (Derived Data)
pub use catalog::{
    domestic_by_genre, find_by_title, find_by_title_exact, sort_by_domestic_descending,
    unique_genres, GenreTotal,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Movie title must not be empty")]
    EmptyTitle,
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
