// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod chart_data;
pub mod movie_service;


// Re-export all services and their types
pub use movie_service::MovieService;

pub use chart_data::{
    bar_chart_data, pie_chart_data, scatter_chart_data, BarChartData, PieChartData,
    ScatterChartData, ScorePoint,
};
