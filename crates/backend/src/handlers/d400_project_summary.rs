use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::dashboards::d400_project_summary::{
    OrganizationSummaryResponse, TeamSummaryResponse,
};
use contracts::enums::Team;

use crate::dashboards::d400_project_summary::service;
use crate::shared::state::AppState;

/// GET /api/d400/summary
pub async fn get_organization_summary(
    State(state): State<AppState>,
) -> Json<OrganizationSummaryResponse> {
    let store = state.store.read().await;
    Json(service::build_organization_summary(&store))
}

/// GET /api/d400/summary/:team
pub async fn get_team_summary(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamSummaryResponse>, StatusCode> {
    let team = Team::from_code(&team).ok_or(StatusCode::NOT_FOUND)?;
    let store = state.store.read().await;
    Ok(Json(service::build_team_summary(
        &store,
        team,
        store.current_user(),
    )))
}
