use serde::{Deserialize, Serialize};

use crate::models::TeamColumn;

// =========================================================
// Heatmap types + route
// =========================================================

/// One cell of the stats heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub column: TeamColumn,
    pub raw: f64,
    /// Min-max normalized value in [0, 1].
    pub normalized: f64,
}

/// Heatmap row for one team, cells in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub team: String,
    pub cells: Vec<HeatmapCell>,
}

/// Min-max normalized stats of the filtered teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub columns: Vec<TeamColumn>,
    pub rows: Vec<HeatmapRow>,
    /// Columns whose values are all equal; every cell there is neutral.
    pub degenerate_columns: Vec<TeamColumn>,
}

pub const GET_TEAM_HEATMAP: &str = "/v1/teams/heatmap";
