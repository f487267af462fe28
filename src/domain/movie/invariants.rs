use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    Ok(())
}

/// Title presence is the only enforced rule; score ranges and gross
/// figures are expectations, not invariants.
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    Ok(())
}

/// Invariants that must hold for the Movie domain:
///
/// 1. Title is never the empty string
/// 2. Duplicate titles are allowed; lookups are first-match-wins
/// 3. A movie can exist without a genre
/// 4. Records are immutable once stored; edits are remove + add
