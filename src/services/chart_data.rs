// src/services/chart_data.rs
//
// Chart series builders
//
// Pure functions over any catalog slice; the caller picks the reference
// set or the persisted catalog as input. Output shapes mirror what a
// charting library consumes, so they serialize both ways.

use serde::{Deserialize, Serialize};

use crate::domain::{domestic_by_genre, sort_by_domestic_descending, Movie};

/// Titles and domestic grosses, highest gross first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Genre labels and summed domestic grosses, first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub x: f64,
    pub y: f64,
}

/// Two point series over the same x axis (critic score).
///
/// `audience` plots audience score against critic score; `critics` plots
/// critic score against itself, the y = x diagonal the audience series is
/// read against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub audience: Vec<ScorePoint>,
    pub critics: Vec<ScorePoint>,
}

pub fn bar_chart_data(catalog: &[Movie]) -> BarChartData {
    let sorted = sort_by_domestic_descending(catalog);

    BarChartData {
        labels: sorted.iter().map(|movie| movie.title.clone()).collect(),
        values: sorted.iter().map(|movie| movie.domestic).collect(),
    }
}

pub fn pie_chart_data(catalog: &[Movie]) -> PieChartData {
    let totals = domestic_by_genre(catalog);

    PieChartData {
        labels: totals.iter().map(|total| total.genre.clone()).collect(),
        values: totals.iter().map(|total| total.domestic_total).collect(),
    }
}

pub fn scatter_chart_data(catalog: &[Movie]) -> ScatterChartData {
    ScatterChartData {
        audience: catalog
            .iter()
            .map(|movie| ScorePoint {
                x: movie.critic_score,
                y: movie.audience_score,
            })
            .collect(),
        critics: catalog
            .iter()
            .map(|movie| ScorePoint {
                x: movie.critic_score,
                y: movie.critic_score,
            })
            .collect(),
    }
}
