//! HTTP server module for the league dashboard.
//!
//! This module provides an axum-based HTTP server that exposes the view model
//! as a read-only JSON API. Handlers are thin: they parse query parameters into
//! `FilterParams`, call the service layer and serialize the result.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and validation                           │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Filtering, summary, heatmap, monthly selection         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset snapshot (Arc<Dataset>, loaded once at startup)  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::{bind_listener, create_router};
pub use state::AppState;
