use serde::{Deserialize, Serialize};

crate::define_label_enum! {
    /// Numeric player columns the player scatter can be coloured by.
    #[derive(Default)]
    pub enum PlayerColumn {
        #[default]
        Ppg => "PPG",
        Rpg => "RPG",
        Apg => "APG",
        Per => "PER",
        FgPct => "FG_PCT",
    }
}

impl PlayerColumn {
    /// Read this column from a player record.
    pub fn value(&self, player: &PlayerRecord) -> f64 {
        match self {
            PlayerColumn::Ppg => player.ppg,
            PlayerColumn::Rpg => player.rpg,
            PlayerColumn::Apg => player.apg,
            PlayerColumn::Per => player.per,
            PlayerColumn::FgPct => player.fg_pct,
        }
    }
}

/// Per-game averages for one player.
///
/// `team` is a free-form code and is not checked against the team table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub fg_pct: f64,
    pub three_pct: f64,
    /// Player efficiency rating
    pub per: f64,
}
