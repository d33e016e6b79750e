//! # League Dashboard Backend
//!
//! Filter-and-aggregate view model for a basketball season dashboard.
//!
//! The crate loads three small tables (team stats, player stats and monthly
//! trends), and turns a user's filter selection into the derived record sets
//! and summary metrics a rendering layer draws. An optional axum server
//! exposes every view as a stateless JSON endpoint.
//!
//! ## Architecture
//!
//! - [`models`]: records, column enums and `FilterParams`
//! - [`parsing`]: CSV loaders with header and cell validation
//! - [`services`]: the view model itself; pure functions over records
//! - [`api`]: view DTOs returned by the services
//! - [`routes`]: per-endpoint view types and route paths
//! - [`config`]: `dashboard.toml` settings and environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use league_dashboard::models::{ConferenceFilter, FilterParams};
//! use league_dashboard::parsing::embedded_dataset;
//! use league_dashboard::services::{apply_team_filter, compute_summary};
//!
//! let dataset = embedded_dataset().unwrap();
//! let params = FilterParams::default()
//!     .with_conference(ConferenceFilter::West)
//!     .with_playoff_only(true);
//! let filtered = apply_team_filter(&dataset.teams, &params);
//! let summary = compute_summary(&filtered, "SGA – 32.7");
//! assert_eq!(summary.team_count, filtered.len());
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;


#[cfg(feature = "http-server")]
pub mod http;

pub use error::{DashboardError, DashboardResult};
