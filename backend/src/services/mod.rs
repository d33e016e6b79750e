//! View-model services.
//!
//! Every function here is a pure computation over immutable records and an
//! explicit `FilterParams`; nothing is cached between calls. The HTTP
//! handlers call these directly.

pub mod filtering;
pub mod heatmap;
pub mod monthly;
pub mod options;
pub mod players;
pub mod summary;
pub mod team_view;


pub use filtering::{apply_team_filter, rank_by_wins, with_win_percentage};
pub use heatmap::{normalize_for_heatmap, DEGENERATE_NEUTRAL};
pub use monthly::{monthly_series, select_monthly};
pub use options::filter_options;
pub use players::player_view;
pub use summary::compute_summary;
pub use team_view::team_view;
