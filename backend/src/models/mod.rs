//! Domain records for the league dashboard.
//!
//! All records are loaded once per process and never mutated; views are
//! recomputed from them on every request.

pub mod dataset;
pub mod filters;
pub mod macros;
pub mod monthly;
pub mod player;
pub mod team;

pub use dataset::{DataSource, Dataset};
pub use filters::{ConferenceFilter, FilterParams};
pub use monthly::{Month, MonthlyRecord};
pub use player::{PlayerColumn, PlayerRecord};
pub use team::{Conference, TeamColumn, TeamRecord};
