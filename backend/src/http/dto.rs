//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters arrive as raw strings and are parsed here so that a bad
//! value produces a JSON `ApiError` rather than a plain-text rejection. View
//! DTOs are re-exported from the api module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use crate::api::{
    DatasetInfo, FilterOptions, HeatmapData, MonthlyView, PlayerView, TeamView,
};

use super::error::AppError;
use crate::config::DashboardSettings;
use crate::models::{ConferenceFilter, FilterParams, PlayerColumn, TeamColumn};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(flatten)]
    pub dataset: DatasetInfo,
}

/// Query parameters shared by the team endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamQuery {
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub min_ppg: Option<String>,
    #[serde(default)]
    pub playoff_only: Option<String>,
}

/// Query parameters for the heatmap endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HeatmapQuery {
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub min_ppg: Option<String>,
    #[serde(default)]
    pub playoff_only: Option<String>,
    /// Comma-separated column labels, e.g. `PPG,AST`
    #[serde(default)]
    pub columns: Option<String>,
}

/// Query parameters for the player endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerQuery {
    #[serde(default)]
    pub color_by: Option<String>,
}

/// Query parameters for the monthly endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonthlyQuery {
    /// Comma-separated team names. Omitted selects every team; empty selects none.
    #[serde(default)]
    pub teams: Option<String>,
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::BadRequest(format!(
            "{} must be true or false, got '{}'",
            name, other
        ))),
    }
}

fn filter_params(
    conference: Option<&str>,
    min_ppg: Option<&str>,
    playoff_only: Option<&str>,
    settings: &DashboardSettings,
) -> Result<FilterParams, AppError> {
    let mut params = FilterParams::default().with_min_ppg(settings.default_min_ppg);

    if let Some(raw) = conference {
        let conference: ConferenceFilter = raw.parse().map_err(AppError::BadRequest)?;
        params = params.with_conference(conference);
    }
    if let Some(raw) = min_ppg {
        let value: f64 = raw.trim().parse().map_err(|_| {
            AppError::BadRequest(format!("min_ppg must be a number, got '{}'", raw))
        })?;
        params = params.with_min_ppg(value);
    }
    if let Some(raw) = playoff_only {
        params = params.with_playoff_only(parse_bool("playoff_only", raw)?);
    }

    params.validate().map_err(AppError::BadRequest)?;
    Ok(params)
}

/// Split a comma-separated list, dropping blank entries.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl TeamQuery {
    /// Build filter parameters; an omitted `min_ppg` takes the slider default.
    pub fn to_params(&self, settings: &DashboardSettings) -> Result<FilterParams, AppError> {
        filter_params(
            self.conference.as_deref(),
            self.min_ppg.as_deref(),
            self.playoff_only.as_deref(),
            settings,
        )
    }
}

impl HeatmapQuery {
    pub fn to_params(&self, settings: &DashboardSettings) -> Result<FilterParams, AppError> {
        filter_params(
            self.conference.as_deref(),
            self.min_ppg.as_deref(),
            self.playoff_only.as_deref(),
            settings,
        )
    }

    /// Requested columns, or the configured default when none are named.
    pub fn to_columns(&self, settings: &DashboardSettings) -> Result<Vec<TeamColumn>, AppError> {
        let columns = match self.columns.as_deref() {
            Some(raw) => split_list(raw)
                .map(|label| label.parse::<TeamColumn>().map_err(AppError::BadRequest))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        if columns.is_empty() {
            return Ok(settings.heatmap_columns.clone());
        }
        Ok(columns)
    }
}

impl PlayerQuery {
    pub fn to_color_by(&self) -> Result<PlayerColumn, AppError> {
        match self.color_by.as_deref() {
            Some(raw) => raw.parse().map_err(AppError::BadRequest),
            None => Ok(PlayerColumn::default()),
        }
    }
}

impl MonthlyQuery {
    /// Selected teams; `None` means the caller did not restrict the selection.
    pub fn to_teams(&self) -> Option<BTreeSet<String>> {
        self.teams
            .as_deref()
            .map(|raw| split_list(raw).map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DashboardSettings {
        DashboardSettings::default()
    }

    #[test]
    fn test_team_query_defaults() {
        let params = TeamQuery::default().to_params(&settings()).unwrap();
        assert_eq!(params.conference, ConferenceFilter::Both);
        assert_eq!(params.min_ppg, 108.0);
        assert!(!params.playoff_only);
    }

    #[test]
    fn test_team_query_parses_values() {
        let query = TeamQuery {
            conference: Some("east".to_string()),
            min_ppg: Some("115.5".to_string()),
            playoff_only: Some("true".to_string()),
        };
        let params = query.to_params(&settings()).unwrap();
        assert_eq!(params.conference, ConferenceFilter::East);
        assert_eq!(params.min_ppg, 115.5);
        assert!(params.playoff_only);
    }

    #[test]
    fn test_team_query_rejects_bad_values() {
        let bad_ppg = TeamQuery {
            min_ppg: Some("lots".to_string()),
            ..Default::default()
        };
        assert!(matches!(bad_ppg.to_params(&settings()), Err(AppError::BadRequest(_))));

        let nan = TeamQuery {
            min_ppg: Some("NaN".to_string()),
            ..Default::default()
        };
        assert!(matches!(nan.to_params(&settings()), Err(AppError::BadRequest(_))));

        let conference = TeamQuery {
            conference: Some("Central".to_string()),
            ..Default::default()
        };
        assert!(matches!(conference.to_params(&settings()), Err(AppError::BadRequest(_))));

        let flag = TeamQuery {
            playoff_only: Some("maybe".to_string()),
            ..Default::default()
        };
        assert!(matches!(flag.to_params(&settings()), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_heatmap_columns() {
        let query = HeatmapQuery {
            columns: Some("PPG, ast".to_string()),
            ..Default::default()
        };
        assert_eq!(
            query.to_columns(&settings()).unwrap(),
            vec![TeamColumn::Ppg, TeamColumn::Assists]
        );

        let empty = HeatmapQuery {
            columns: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(empty.to_columns(&settings()).unwrap().len(), 6);

        let bad = HeatmapQuery {
            columns: Some("PPG,BLK".to_string()),
            ..Default::default()
        };
        assert!(bad.to_columns(&settings()).is_err());
    }

    #[test]
    fn test_player_query() {
        assert_eq!(PlayerQuery::default().to_color_by().unwrap(), PlayerColumn::Ppg);
        let query = PlayerQuery {
            color_by: Some("per".to_string()),
        };
        assert_eq!(query.to_color_by().unwrap(), PlayerColumn::Per);
    }

    #[test]
    fn test_monthly_query() {
        assert_eq!(MonthlyQuery::default().to_teams(), None);

        let empty = MonthlyQuery {
            teams: Some("".to_string()),
        };
        assert_eq!(empty.to_teams(), Some(BTreeSet::new()));

        let some = MonthlyQuery {
            teams: Some("OKC, Boston,OKC".to_string()),
        };
        let teams = some.to_teams().unwrap();
        assert_eq!(teams.len(), 2);
        assert!(teams.contains("Boston"));
    }
}
