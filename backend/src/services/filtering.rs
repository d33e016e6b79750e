//! Team filtering and derived per-team columns.

use log::{debug, warn};

use crate::api::TeamRow;
use crate::models::{FilterParams, TeamRecord};

/// Keep the records admitted by `params`, preserving their relative order.
///
/// An empty result is a valid outcome, not an error.
pub fn apply_team_filter(records: &[TeamRecord], params: &FilterParams) -> Vec<TeamRecord> {
    let filtered: Vec<TeamRecord> = records
        .iter()
        .filter(|team| params.admits(team))
        .cloned()
        .collect();

    debug!(
        "Team filter {:?} min_ppg={} playoff_only={}: {} of {} teams",
        params.conference,
        params.min_ppg,
        params.playoff_only,
        filtered.len(),
        records.len()
    );
    filtered
}

/// Attach the derived win percentage to each record.
///
/// A team with no games played gets `0.0` and `win_pct_undefined = true`.
pub fn with_win_percentage(records: Vec<TeamRecord>) -> Vec<TeamRow> {
    records
        .into_iter()
        .map(|team| match team.win_percentage() {
            Ok(win_pct) => TeamRow {
                team,
                win_pct,
                win_pct_undefined: false,
            },
            Err(e) => {
                warn!("{}; reporting 0.0", e);
                TeamRow {
                    team,
                    win_pct: 0.0,
                    win_pct_undefined: true,
                }
            }
        })
        .collect()
}

/// Team names ordered by wins ascending; ties keep their input order.
pub fn rank_by_wins(records: &[TeamRecord]) -> Vec<String> {
    let mut ranked: Vec<&TeamRecord> = records.iter().collect();
    ranked.sort_by_key(|team| team.wins);
    ranked.into_iter().map(|team| team.name.clone()).collect()
}
