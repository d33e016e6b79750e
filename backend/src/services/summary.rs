//! Summary cards for a filtered team set.

use crate::api::TeamSummary;
use crate::models::TeamRecord;

/// Count, mean PPG and mean wins of `filtered`.
///
/// `top_scorer` is passed through unchanged; it does not depend on the filter.
pub fn compute_summary(filtered: &[TeamRecord], top_scorer: &str) -> TeamSummary {
    let team_count = filtered.len();
    if team_count == 0 {
        return TeamSummary {
            team_count,
            mean_ppg: None,
            mean_wins: None,
            top_scorer: top_scorer.to_string(),
        };
    }

    let n = team_count as f64;
    let mean_ppg = filtered.iter().map(|t| t.ppg).sum::<f64>() / n;
    let total_wins: u64 = filtered.iter().map(|t| u64::from(t.wins)).sum();
    let mean_wins = (total_wins as f64 / n).round_ties_even() as u32;

    TeamSummary {
        team_count,
        mean_ppg: Some(mean_ppg),
        mean_wins: Some(mean_wins),
        top_scorer: top_scorer.to_string(),
    }
}
