use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

crate::define_label_enum! {
    /// Conference a team plays in.
    pub enum Conference {
        East => "East",
        West => "West",
    }
}

crate::define_label_enum! {
    /// Numeric team columns that can be displayed in the stats heatmap.
    pub enum TeamColumn {
        Ppg => "PPG",
        OppPpg => "OPP_PPG",
        FgPct => "FG_PCT",
        ThreePct => "3P_PCT",
        Rebounds => "REB",
        Assists => "AST",
    }
}

impl TeamColumn {
    /// Read this column from a team record.
    pub fn value(&self, team: &TeamRecord) -> f64 {
        match self {
            TeamColumn::Ppg => team.ppg,
            TeamColumn::OppPpg => team.opp_ppg,
            TeamColumn::FgPct => team.fg_pct,
            TeamColumn::ThreePct => team.three_pct,
            TeamColumn::Rebounds => team.rebounds,
            TeamColumn::Assists => team.assists,
        }
    }
}

/// Season totals and per-game averages for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub conference: Conference,
    pub wins: u32,
    pub losses: u32,
    /// Points scored per game
    pub ppg: f64,
    /// Points allowed per game
    pub opp_ppg: f64,
    pub fg_pct: f64,
    pub three_pct: f64,
    pub rebounds: f64,
    pub assists: f64,
    /// Qualified for the playoffs
    pub playoff: bool,
}

impl TeamRecord {
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Wins over games played, rounded to three decimals.
    ///
    /// Fails with `DivisionUndefined` when the team has played no games.
    pub fn win_percentage(&self) -> DashboardResult<f64> {
        let games = self.games_played();
        if games == 0 {
            return Err(DashboardError::DivisionUndefined {
                team: self.name.clone(),
            });
        }
        Ok(round_to(f64::from(self.wins) / games as f64, 3))
    }
}

/// Round `value` to `places` decimal places, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, wins: u32, losses: u32) -> TeamRecord {
        TeamRecord {
            name: name.to_string(),
            conference: Conference::East,
            wins,
            losses,
            ppg: 110.0,
            opp_ppg: 108.0,
            fg_pct: 0.47,
            three_pct: 0.36,
            rebounds: 44.0,
            assists: 26.0,
            playoff: true,
        }
    }

    #[test]
    fn test_win_percentage_rounds_to_three_places() {
        assert_eq!(team("Boston", 61, 21).win_percentage().unwrap(), 0.744);
        assert_eq!(team("OKC", 68, 14).win_percentage().unwrap(), 0.829);
        assert_eq!(team("Perfect", 10, 0).win_percentage().unwrap(), 1.0);
    }

    #[test]
    fn test_win_percentage_zero_games() {
        let err = team("Expansion", 0, 0).win_percentage().unwrap_err();
        assert!(matches!(err, DashboardError::DivisionUndefined { ref team } if team == "Expansion"));
    }

    #[test]
    fn test_games_played_does_not_overflow() {
        assert_eq!(team("Big", u32::MAX, u32::MAX).games_played(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_team_column_labels() {
        let labels: Vec<&str> = TeamColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["PPG", "OPP_PPG", "FG_PCT", "3P_PCT", "REB", "AST"]);
        assert_eq!("3p_pct".parse::<TeamColumn>(), Ok(TeamColumn::ThreePct));
    }

    #[test]
    fn test_team_column_value() {
        let t = team("Boston", 61, 21);
        assert_eq!(TeamColumn::Ppg.value(&t), 110.0);
        assert_eq!(TeamColumn::OppPpg.value(&t), 108.0);
        assert_eq!(TeamColumn::Assists.value(&t), 26.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.74390, 3), 0.744);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(-1.23456, 2), -1.23);
    }

    #[test]
    fn test_win_percentage_ties_round_to_even() {
        assert_eq!(team("Washington", 1, 15).win_percentage().unwrap(), 0.062);
        assert_eq!(team("Charlotte", 3, 13).win_percentage().unwrap(), 0.188);
    }
}
