// src/lib.rs
// MovieHub - Local-first movie catalog manager
//
// Architecture:
// - Domain-centric: catalog rules and queries live in the domain
// - Explicit: no implicit behavior, no magic
// - Local-first: the user's catalog stays on the user's machine
// - Application Layer: wires the whole stack once at startup

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod dataset;
pub mod db;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    domestic_by_genre,
    find_by_title,
    find_by_title_exact,
    sort_by_domestic_descending,
    unique_genres,
    validate_movie,
    validate_title,
    GenreTotal,
    Movie,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, get_database_path, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{get_json, set_json, KeyValueStore, SqliteKeyValueStore, StoredValue};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{KvMovieRepository, MovieRepository};

// ============================================================================
// PUBLIC API - Dataset
// ============================================================================

pub use dataset::{default_catalog, load_catalog, parse_catalog};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    bar_chart_data,
    pie_chart_data,
    scatter_chart_data,
    BarChartData,
    MovieService,
    PieChartData,
    ScatterChartData,
    ScorePoint,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppConfig, AppState};
