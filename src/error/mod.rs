// src/error/mod.rs
//
// Error types shared across the crate

pub mod types;

pub use types::{AppError, AppResult};
