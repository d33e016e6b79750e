//! CSV readers for the three dashboard tables.
//!
//! Every reader checks the header row against the canonical column list before
//! reading any data, then converts rows one at a time. The first bad row aborts
//! the load; no table is ever returned partially.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{DashboardError, DashboardResult, SchemaContext};
use crate::models::{Conference, Month, MonthlyRecord, PlayerRecord, TeamRecord};

pub const TEAMS_TABLE: &str = "teams";
pub const PLAYERS_TABLE: &str = "players";
pub const MONTHLY_TABLE: &str = "monthly";

/// Required header of `teams.csv`.
pub const TEAM_COLUMNS: [&str; 11] = [
    "Team",
    "Conference",
    "Wins",
    "Losses",
    "PPG",
    "OPP_PPG",
    "FG_PCT",
    "3P_PCT",
    "REB",
    "AST",
    "Playoff",
];

/// Required header of `players.csv`.
pub const PLAYER_COLUMNS: [&str; 8] = ["Player", "Team", "PPG", "RPG", "APG", "FG_PCT", "3P_PCT", "PER"];

/// Required header of `monthly.csv`.
pub const MONTHLY_COLUMNS: [&str; 4] = ["Team", "Month", "Win_PCT", "PPG"];

#[derive(Debug, Deserialize)]
struct RawTeam {
    #[serde(rename = "Team")]
    name: String,
    #[serde(rename = "Conference")]
    conference: String,
    #[serde(rename = "Wins")]
    wins: u32,
    #[serde(rename = "Losses")]
    losses: u32,
    #[serde(rename = "PPG")]
    ppg: f64,
    #[serde(rename = "OPP_PPG")]
    opp_ppg: f64,
    #[serde(rename = "FG_PCT")]
    fg_pct: f64,
    #[serde(rename = "3P_PCT")]
    three_pct: f64,
    #[serde(rename = "REB")]
    rebounds: f64,
    #[serde(rename = "AST")]
    assists: f64,
    #[serde(rename = "Playoff")]
    playoff: String,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(rename = "Player")]
    name: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "PPG")]
    ppg: f64,
    #[serde(rename = "RPG")]
    rpg: f64,
    #[serde(rename = "APG")]
    apg: f64,
    #[serde(rename = "FG_PCT")]
    fg_pct: f64,
    #[serde(rename = "3P_PCT")]
    three_pct: f64,
    #[serde(rename = "PER")]
    per: f64,
}

#[derive(Debug, Deserialize)]
struct RawMonthly {
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Win_PCT")]
    win_pct: f64,
    #[serde(rename = "PPG")]
    ppg: f64,
}

/// Accept the boolean spellings spreadsheet exports produce.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Reject NaN and infinities in numeric cells.
fn ensure_finite(table: &str, line: u64, values: &[(&str, f64)]) -> DashboardResult<()> {
    for (column, value) in values {
        if !value.is_finite() {
            return Err(DashboardError::schema(
                format!("non-finite value {}", value),
                SchemaContext::new(table).with_line(line).with_column(*column),
            ));
        }
    }
    Ok(())
}

fn ensure_non_empty(table: &str, line: u64, column: &str, value: &str) -> DashboardResult<()> {
    if value.is_empty() {
        return Err(DashboardError::schema(
            "empty name",
            SchemaContext::new(table).with_line(line).with_column(column),
        ));
    }
    Ok(())
}

fn csv_error(
    table: &str,
    headers: Option<&csv::StringRecord>,
    line: Option<u64>,
    err: csv::Error,
) -> DashboardError {
    let mut context = SchemaContext::new(table);
    if let Some(line) = line.or_else(|| err.position().map(|p| p.line())) {
        context = context.with_line(line);
    }
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        let column = de
            .field()
            .and_then(|index| headers.and_then(|h| h.get(index as usize)));
        if let Some(column) = column {
            context = context.with_column(column);
        }
        return DashboardError::schema(de.kind().to_string(), context);
    }
    DashboardError::schema(err.to_string(), context)
}

fn check_columns(table: &str, headers: &csv::StringRecord, required: &[&str]) -> DashboardResult<()> {
    let present: HashSet<&str> = headers.iter().collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|c| !present.contains(c))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(DashboardError::schema(
        format!("missing required column(s): {}", missing.join(", ")),
        SchemaContext::new(table)
            .with_line(1)
            .with_column(missing[0])
            .with_details(format!("found: {}", headers.iter().collect::<Vec<_>>().join(","))),
    ))
}

/// Read one table: validate the header, deserialize each row and convert it.
fn read_table<R, T, O, F>(rdr: R, table: &str, required: &[&str], mut convert: F) -> DashboardResult<Vec<O>>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut(T, u64) -> DashboardResult<O>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(table, None, Some(1), e))?
        .clone();
    check_columns(table, &headers, required)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(table, Some(&headers), None, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let raw: T = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(table, Some(&headers), Some(line), e))?;
        rows.push(convert(raw, line)?);
    }

    debug!("Read {} rows from {} table", rows.len(), table);
    Ok(rows)
}

/// Read the team table from any reader.
pub fn read_teams<R: Read>(rdr: R) -> DashboardResult<Vec<TeamRecord>> {
    read_table(rdr, TEAMS_TABLE, &TEAM_COLUMNS, |raw: RawTeam, line| {
        ensure_non_empty(TEAMS_TABLE, line, "Team", &raw.name)?;
        ensure_finite(
            TEAMS_TABLE,
            line,
            &[
                ("PPG", raw.ppg),
                ("OPP_PPG", raw.opp_ppg),
                ("FG_PCT", raw.fg_pct),
                ("3P_PCT", raw.three_pct),
                ("REB", raw.rebounds),
                ("AST", raw.assists),
            ],
        )?;
        let conference: Conference = raw.conference.parse().map_err(|e: String| {
            DashboardError::schema(
                e,
                SchemaContext::new(TEAMS_TABLE)
                    .with_line(line)
                    .with_column("Conference"),
            )
        })?;
        let playoff = parse_flag(&raw.playoff).ok_or_else(|| {
            DashboardError::schema(
                format!("invalid boolean '{}', expected True or False", raw.playoff),
                SchemaContext::new(TEAMS_TABLE)
                    .with_line(line)
                    .with_column("Playoff"),
            )
        })?;
        Ok(TeamRecord {
            name: raw.name,
            conference,
            wins: raw.wins,
            losses: raw.losses,
            ppg: raw.ppg,
            opp_ppg: raw.opp_ppg,
            fg_pct: raw.fg_pct,
            three_pct: raw.three_pct,
            rebounds: raw.rebounds,
            assists: raw.assists,
            playoff,
        })
    })
}

/// Read the player table from any reader.
pub fn read_players<R: Read>(rdr: R) -> DashboardResult<Vec<PlayerRecord>> {
    read_table(rdr, PLAYERS_TABLE, &PLAYER_COLUMNS, |raw: RawPlayer, line| {
        ensure_non_empty(PLAYERS_TABLE, line, "Player", &raw.name)?;
        ensure_finite(
            PLAYERS_TABLE,
            line,
            &[
                ("PPG", raw.ppg),
                ("RPG", raw.rpg),
                ("APG", raw.apg),
                ("FG_PCT", raw.fg_pct),
                ("3P_PCT", raw.three_pct),
                ("PER", raw.per),
            ],
        )?;
        Ok(PlayerRecord {
            name: raw.name,
            team: raw.team,
            ppg: raw.ppg,
            rpg: raw.rpg,
            apg: raw.apg,
            fg_pct: raw.fg_pct,
            three_pct: raw.three_pct,
            per: raw.per,
        })
    })
}

/// Read the monthly trends table from any reader.
///
/// Unknown month labels fail with `UnrecognizedMonth`; a repeated
/// (team, month) pair or a win percentage outside [0, 1] is a schema error.
pub fn read_monthly<R: Read>(rdr: R) -> DashboardResult<Vec<MonthlyRecord>> {
    let mut seen: HashSet<(String, Month)> = HashSet::new();
    read_table(rdr, MONTHLY_TABLE, &MONTHLY_COLUMNS, |raw: RawMonthly, line| {
        ensure_non_empty(MONTHLY_TABLE, line, "Team", &raw.team)?;
        ensure_finite(MONTHLY_TABLE, line, &[("Win_PCT", raw.win_pct), ("PPG", raw.ppg)])?;
        if !(0.0..=1.0).contains(&raw.win_pct) {
            return Err(DashboardError::schema(
                format!("win percentage {} outside [0, 1]", raw.win_pct),
                SchemaContext::new(MONTHLY_TABLE)
                    .with_line(line)
                    .with_column("Win_PCT"),
            ));
        }
        let month: Month = raw
            .month
            .parse()
            .map_err(|_| DashboardError::UnrecognizedMonth {
                label: raw.month.clone(),
                team: raw.team.clone(),
            })?;
        if !seen.insert((raw.team.clone(), month)) {
            return Err(DashboardError::schema(
                format!("duplicate entry for {} in {}", raw.team, month),
                SchemaContext::new(MONTHLY_TABLE)
                    .with_line(line)
                    .with_column("Month"),
            ));
        }
        Ok(MonthlyRecord {
            team: raw.team,
            month,
            win_pct: raw.win_pct,
            ppg: raw.ppg,
        })
    })
}

fn open(path: &Path) -> DashboardResult<File> {
    File::open(path).map_err(|e| DashboardError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load the team table from a CSV file.
pub fn load_teams(path: &Path) -> DashboardResult<Vec<TeamRecord>> {
    read_teams(open(path)?)
}

/// Load the player table from a CSV file.
pub fn load_players(path: &Path) -> DashboardResult<Vec<PlayerRecord>> {
    read_players(open(path)?)
}

/// Load the monthly trends table from a CSV file.
pub fn load_monthly(path: &Path) -> DashboardResult<Vec<MonthlyRecord>> {
    read_monthly(open(path)?)
}
