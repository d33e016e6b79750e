use serde::{Deserialize, Serialize};

use crate::models::{ConferenceFilter, Month, PlayerColumn, TeamColumn};

// =========================================================
// Filter option types + route
// =========================================================

/// Range of the minimum-PPG slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Choices offered by the dashboard filter widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub conferences: Vec<ConferenceFilter>,
    pub min_ppg: SliderBounds,
    pub color_dimensions: Vec<PlayerColumn>,
    pub heatmap_columns: Vec<TeamColumn>,
    /// Teams with monthly data, first-appearance order.
    pub monthly_teams: Vec<String>,
    pub months: Vec<Month>,
}

pub const GET_FILTER_OPTIONS: &str = "/v1/options";
