//! Assembles the team table, summary and wins ranking for one selection.

use crate::api::TeamView;
use crate::models::{FilterParams, TeamRecord};

use super::filtering::{apply_team_filter, rank_by_wins, with_win_percentage};
use super::summary::compute_summary;

/// Filter once and derive every team-level output from the same subset.
pub fn team_view(records: &[TeamRecord], params: &FilterParams, top_scorer: &str) -> TeamView {
    let filtered = apply_team_filter(records, params);
    let summary = compute_summary(&filtered, top_scorer);
    let wins_order = rank_by_wins(&filtered);

    TeamView {
        params: params.clone(),
        teams: with_win_percentage(filtered),
        summary,
        wins_order,
    }
}
