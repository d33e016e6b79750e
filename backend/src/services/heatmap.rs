//! Min-max normalization of team stats for the heatmap.

use crate::api::{HeatmapCell, HeatmapData, HeatmapRow};
use crate::models::{TeamColumn, TeamRecord};

/// Normalized value used for every cell of a column whose values are all equal.
pub const DEGENERATE_NEUTRAL: f64 = 0.5;

/// Normalize each of `columns` over `filtered` to [0, 1].
///
/// Repeated columns are kept once, in first-mention order. A column with
/// `max == min` (which includes a single team) maps to [`DEGENERATE_NEUTRAL`].
pub fn normalize_for_heatmap(filtered: &[TeamRecord], columns: &[TeamColumn]) -> HeatmapData {
    let mut unique: Vec<TeamColumn> = Vec::with_capacity(columns.len());
    for column in columns {
        if !unique.contains(column) {
            unique.push(*column);
        }
    }

    let ranges: Vec<(f64, f64)> = unique
        .iter()
        .map(|column| {
            filtered
                .iter()
                .map(|team| column.value(team))
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                })
        })
        .collect();

    let degenerate_columns: Vec<TeamColumn> = if filtered.is_empty() {
        Vec::new()
    } else {
        unique
            .iter()
            .zip(ranges.iter())
            .filter(|(_, (lo, hi))| hi == lo)
            .map(|(column, _)| *column)
            .collect()
    };

    let rows = filtered
        .iter()
        .map(|team| HeatmapRow {
            team: team.name.clone(),
            cells: unique
                .iter()
                .zip(ranges.iter())
                .map(|(column, &(lo, hi))| {
                    let raw = column.value(team);
                    let normalized = if hi > lo {
                        (raw - lo) / (hi - lo)
                    } else {
                        DEGENERATE_NEUTRAL
                    };
                    HeatmapCell {
                        column: *column,
                        raw,
                        normalized,
                    }
                })
                .collect(),
        })
        .collect();

    HeatmapData {
        columns: unique,
        rows,
        degenerate_columns,
    }
}
