//! Player table ordering and scatter colour values.

use crate::api::{PlayerRow, PlayerView};
use crate::models::{PlayerColumn, PlayerRecord};

/// Players sorted by PPG descending with the `color_by` value attached.
pub fn player_view(players: &[PlayerRecord], color_by: PlayerColumn) -> PlayerView {
    let mut rows: Vec<PlayerRow> = players
        .iter()
        .map(|player| PlayerRow {
            color_value: color_by.value(player),
            player: player.clone(),
        })
        .collect();
    rows.sort_by(|a, b| b.player.ppg.total_cmp(&a.player.ppg));

    PlayerView {
        color_by,
        players: rows,
    }
}
