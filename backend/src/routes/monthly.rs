use serde::{Deserialize, Serialize};

use crate::models::{Month, MonthlyRecord};

// =========================================================
// Monthly trends types + route
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: Month,
    pub win_pct: f64,
    pub ppg: f64,
}

/// One line of the monthly trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub team: String,
    pub points: Vec<MonthlyPoint>,
}

/// Monthly records of the selected teams, flat and grouped per team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyView {
    pub teams: Vec<String>,
    pub records: Vec<MonthlyRecord>,
    pub series: Vec<MonthlySeries>,
}

pub const GET_MONTHLY_VIEW: &str = "/v1/monthly";
