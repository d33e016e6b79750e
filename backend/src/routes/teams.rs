use serde::{Deserialize, Serialize};

use crate::models::{FilterParams, TeamRecord};

// =========================================================
// Team table types + route
// =========================================================

/// One filtered team with its derived win percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    #[serde(flatten)]
    pub team: TeamRecord,
    /// Wins over games played, three decimals. `0.0` when undefined.
    pub win_pct: f64,
    /// Set when the team has no games played and `win_pct` is a placeholder.
    pub win_pct_undefined: bool,
}

/// Summary cards above the team table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_count: usize,
    /// `None` when no team passes the filter.
    pub mean_ppg: Option<f64>,
    /// Mean wins rounded half-to-even; `None` when no team passes the filter.
    pub mean_wins: Option<u32>,
    pub top_scorer: String,
}

/// Everything the team-level charts need for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub params: FilterParams,
    pub teams: Vec<TeamRow>,
    pub summary: TeamSummary,
    /// Filtered team names ordered by wins ascending.
    pub wins_order: Vec<String>,
}

pub const GET_TEAM_VIEW: &str = "/v1/teams";
