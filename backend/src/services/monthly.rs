//! Monthly trend selection and per-team series.

use std::collections::BTreeSet;

use log::debug;

use crate::api::{MonthlyPoint, MonthlySeries};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{Month, MonthlyRecord};

/// Records of the teams in `team_names`, ordered by month then team name.
///
/// Every input record must have its month in `month_order`, selected or not;
/// otherwise the whole call fails with `UnrecognizedMonth` and nothing is
/// returned.
pub fn select_monthly(
    records: &[MonthlyRecord],
    team_names: &BTreeSet<String>,
    month_order: &[Month],
) -> DashboardResult<Vec<MonthlyRecord>> {
    let mut keyed: Vec<(usize, &MonthlyRecord)> = Vec::new();
    for record in records {
        let position = month_order
            .iter()
            .position(|m| *m == record.month)
            .ok_or_else(|| DashboardError::UnrecognizedMonth {
                label: record.month.label().to_string(),
                team: record.team.clone(),
            })?;
        if team_names.contains(&record.team) {
            keyed.push((position, record));
        }
    }

    keyed.sort_by(|(pa, a), (pb, b)| pa.cmp(pb).then_with(|| a.team.cmp(&b.team)));

    debug!(
        "Selected {} monthly records for {} team(s)",
        keyed.len(),
        team_names.len()
    );
    Ok(keyed.into_iter().map(|(_, record)| record.clone()).collect())
}

/// Group ordered monthly records into one series per team.
///
/// Series appear in order of each team's first record; points keep the
/// input order, so feeding `select_monthly` output yields month-ordered lines.
pub fn monthly_series(records: &[MonthlyRecord]) -> Vec<MonthlySeries> {
    let mut series: Vec<MonthlySeries> = Vec::new();
    for record in records {
        let point = MonthlyPoint {
            month: record.month,
            win_pct: record.win_pct,
            ppg: record.ppg,
        };
        match series.iter_mut().find(|s| s.team == record.team) {
            Some(existing) => existing.points.push(point),
            None => series.push(MonthlySeries {
                team: record.team.clone(),
                points: vec![point],
            }),
        }
    }
    series
}
