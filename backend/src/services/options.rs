//! Filter widget choices.

use crate::api::{FilterOptions, SliderBounds};
use crate::models::{ConferenceFilter, Dataset, Month, PlayerColumn, TeamColumn};

pub const MIN_PPG_FLOOR: f64 = 100.0;
pub const MIN_PPG_CEILING: f64 = 125.0;

/// Option lists for the current dataset.
///
/// `default_min_ppg` is clamped into the slider range.
pub fn filter_options(dataset: &Dataset, default_min_ppg: f64) -> FilterOptions {
    FilterOptions {
        conferences: ConferenceFilter::ALL.to_vec(),
        min_ppg: SliderBounds {
            min: MIN_PPG_FLOOR,
            max: MIN_PPG_CEILING,
            default: default_min_ppg.clamp(MIN_PPG_FLOOR, MIN_PPG_CEILING),
        },
        color_dimensions: PlayerColumn::ALL.to_vec(),
        heatmap_columns: TeamColumn::ALL.to_vec(),
        monthly_teams: dataset.monthly_team_names(),
        months: Month::season_order().to_vec(),
    }
}
