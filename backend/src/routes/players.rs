use serde::{Deserialize, Serialize};

use crate::models::{PlayerColumn, PlayerRecord};

// =========================================================
// Player table types + route
// =========================================================

/// A player together with the value of the colour dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub color_value: f64,
}

/// Player table and scatter data, ordered by PPG descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub color_by: PlayerColumn,
    pub players: Vec<PlayerRow>,
}

pub const GET_PLAYER_VIEW: &str = "/v1/players";
