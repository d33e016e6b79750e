//! Public API surface for the dashboard backend.
//!
//! This file consolidates the view types returned by the services and
//! serialized by the HTTP API. All types derive Serialize/Deserialize.

pub use crate::routes::heatmap::HeatmapCell;
pub use crate::routes::heatmap::HeatmapData;
pub use crate::routes::heatmap::HeatmapRow;
pub use crate::routes::monthly::MonthlyPoint;
pub use crate::routes::monthly::MonthlySeries;
pub use crate::routes::monthly::MonthlyView;
pub use crate::routes::options::FilterOptions;
pub use crate::routes::options::SliderBounds;
pub use crate::routes::players::PlayerRow;
pub use crate::routes::players::PlayerView;
pub use crate::routes::teams::TeamRow;
pub use crate::routes::teams::TeamSummary;
pub use crate::routes::teams::TeamView;

pub use crate::models::{
    Conference, ConferenceFilter, FilterParams, Month, MonthlyRecord, PlayerColumn, PlayerRecord,
    TeamColumn, TeamRecord,
};

use serde::{Deserialize, Serialize};

/// Dataset overview reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub teams: usize,
    pub players: usize,
    pub monthly_records: usize,
    /// `embedded` or `directory:<path>`
    pub source: String,
}

impl DatasetInfo {
    pub fn from_dataset(dataset: &crate::models::Dataset) -> Self {
        Self {
            teams: dataset.teams.len(),
            players: dataset.players.len(),
            monthly_records: dataset.monthly.len(),
            source: dataset.source.to_string(),
        }
    }
}
