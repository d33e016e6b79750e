use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use super::monthly::MonthlyRecord;
use super::player::PlayerRecord;
use super::team::TeamRecord;

/// Where a dataset snapshot was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum DataSource {
    /// Season snapshot compiled into the binary
    Embedded,
    /// CSV files in a directory
    Directory(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Embedded => write!(f, "embedded"),
            DataSource::Directory(path) => write!(f, "directory:{}", path.display()),
        }
    }
}

/// Immutable snapshot of the three dashboard tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub teams: Vec<TeamRecord>,
    pub players: Vec<PlayerRecord>,
    pub monthly: Vec<MonthlyRecord>,
    pub source: DataSource,
}

impl Dataset {
    /// Teams present in the monthly table, in first-appearance order.
    pub fn monthly_team_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.monthly
            .iter()
            .filter(|r| seen.insert(r.team.as_str()))
            .map(|r| r.team.clone())
            .collect()
    }
}
