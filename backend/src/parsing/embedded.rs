//! The 2024-25 season snapshot compiled into the binary.

use crate::error::DashboardResult;
use crate::models::{DataSource, Dataset};

use super::csv_parser::{read_monthly, read_players, read_teams};

pub const TEAMS_CSV: &str = include_str!("../../data/teams.csv");
pub const PLAYERS_CSV: &str = include_str!("../../data/players.csv");
pub const MONTHLY_CSV: &str = include_str!("../../data/monthly.csv");

/// Parse the embedded tables with the same validation as file-based loads.
pub fn embedded_dataset() -> DashboardResult<Dataset> {
    Ok(Dataset {
        teams: read_teams(TEAMS_CSV.as_bytes())?,
        players: read_players(PLAYERS_CSV.as_bytes())?,
        monthly: read_monthly(MONTHLY_CSV.as_bytes())?,
        source: DataSource::Embedded,
    })
}
