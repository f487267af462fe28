// src/dataset.rs
//
// Bundled reference catalog

use std::fs;
use std::path::Path;

use crate::domain::Movie;
use crate::error::AppResult;

/// Reference dataset shipped with the crate, embedded at compile time.
const BUNDLED_CATALOG: &str = include_str!("../movie-data.json");

/// The bundled reference catalog of 2023 releases.
pub fn default_catalog() -> AppResult<Vec<Movie>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Parse a catalog from raw JSON text: one array of movie objects.
pub fn parse_catalog(raw: &str) -> AppResult<Vec<Movie>> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a catalog file, for consumers that ship their own dataset.
pub fn load_catalog(path: &Path) -> AppResult<Vec<Movie>> {
    let raw = fs::read_to_string(path)?;
    parse_catalog(&raw)
}
