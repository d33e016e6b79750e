//! Loaders for the dashboard tables.
//!
//! # Sources
//!
//! - [`embedded`]: the season snapshot compiled into the binary
//! - [`csv_parser`]: `teams.csv`, `players.csv` and `monthly.csv` from disk
//!
//! Both paths run the same header and cell validation and fail fast with
//! [`DashboardError::Schema`](crate::error::DashboardError::Schema).
//!
//! # Example
//!
//! ```no_run
//! use league_dashboard::config::DataSettings;
//! use league_dashboard::parsing::load_dataset;
//!
//! let dataset = load_dataset(&DataSettings::default()).expect("dataset");
//! println!("{} teams", dataset.teams.len());
//! ```

pub mod csv_parser;
pub mod embedded;


pub use csv_parser::{load_monthly, load_players, load_teams, read_monthly, read_players, read_teams};
pub use embedded::embedded_dataset;

use log::info;
use std::path::Path;

use crate::config::{DataSettings, SourceKind};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{DataSource, Dataset};

/// Load the three tables from a directory using the configured file names.
pub fn load_dataset_from_dir(dir: &Path, settings: &DataSettings) -> DashboardResult<Dataset> {
    Ok(Dataset {
        teams: load_teams(&dir.join(&settings.teams_file))?,
        players: load_players(&dir.join(&settings.players_file))?,
        monthly: load_monthly(&dir.join(&settings.monthly_file))?,
        source: DataSource::Directory(dir.to_path_buf()),
    })
}

/// Load the dataset selected by the data settings.
pub fn load_dataset(settings: &DataSettings) -> DashboardResult<Dataset> {
    let dataset = match settings.source {
        SourceKind::Embedded => embedded_dataset()?,
        SourceKind::Directory => {
            let dir = settings.directory.as_deref().ok_or_else(|| {
                DashboardError::Configuration(
                    "data.source = \"directory\" requires data.directory".to_string(),
                )
            })?;
            load_dataset_from_dir(dir, settings)?
        }
    };

    info!(
        "Loaded dataset from {}: {} teams, {} players, {} monthly records",
        dataset.source,
        dataset.teams.len(),
        dataset.players.len(),
        dataset.monthly.len()
    );
    Ok(dataset)
}
