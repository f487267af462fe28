// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain and its services
// - It wires pool, schema, store, repository and service once at startup
// - It never reaches around the service into storage

pub mod state;

pub use state::{AppConfig, AppState};
