//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Handlers never mutate shared state.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    DatasetInfo, FilterOptions, HealthResponse, HeatmapData, HeatmapQuery, MonthlyQuery,
    MonthlyView, PlayerQuery, PlayerView, TeamQuery, TeamView,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::Month;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports the service version and the size of the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset: DatasetInfo::from_dataset(&state.dataset),
    }))
}

// =============================================================================
// Team Views
// =============================================================================

/// GET /v1/teams
///
/// Filtered team table with win percentages, summary cards and wins ranking.
pub async fn get_team_view(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> HandlerResult<TeamView> {
    let params = query.to_params(&state.settings)?;
    Ok(Json(services::team_view(
        &state.dataset.teams,
        &params,
        &state.settings.top_scorer,
    )))
}

/// GET /v1/teams/heatmap
///
/// Min-max normalized stats of the filtered teams.
pub async fn get_team_heatmap(
    State(state): State<AppState>,
    Query(query): Query<HeatmapQuery>,
) -> HandlerResult<HeatmapData> {
    let params = query.to_params(&state.settings)?;
    let columns = query.to_columns(&state.settings)?;
    let filtered = services::apply_team_filter(&state.dataset.teams, &params);
    Ok(Json(services::normalize_for_heatmap(&filtered, &columns)))
}

// =============================================================================
// Player and Monthly Views
// =============================================================================

/// GET /v1/players
///
/// Player table ordered by PPG with the requested colour dimension.
pub async fn get_player_view(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> HandlerResult<PlayerView> {
    let color_by = query.to_color_by()?;
    Ok(Json(services::player_view(&state.dataset.players, color_by)))
}

/// GET /v1/monthly
///
/// Monthly trend records for the selected teams, in season order.
pub async fn get_monthly_view(
    State(state): State<AppState>,
    Query(query): Query<MonthlyQuery>,
) -> HandlerResult<MonthlyView> {
    let teams = query
        .to_teams()
        .unwrap_or_else(|| state.dataset.monthly_team_names().into_iter().collect());
    let records = services::select_monthly(&state.dataset.monthly, &teams, Month::season_order())?;
    let series = services::monthly_series(&records);

    Ok(Json(MonthlyView {
        teams: teams.into_iter().collect(),
        records,
        series,
    }))
}

/// GET /v1/options
///
/// Choices for the filter widgets.
pub async fn get_filter_options(State(state): State<AppState>) -> HandlerResult<FilterOptions> {
    Ok(Json(services::filter_options(
        &state.dataset,
        state.settings.default_min_ppg,
    )))
}
