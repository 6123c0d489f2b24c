use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::shared::state::AppState;
use crate::{handlers, system};

/// Upload limit for spreadsheet imports
const IMPORT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM: DEMO SESSION
        // ========================================
        .route("/api/system/users", get(system::handlers::auth::list_users))
        .route("/api/system/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        // ========================================
        // A001 PROJECTS
        // ========================================
        .route("/api/projects", get(handlers::a001_project::list_all))
        .route(
            "/api/projects/export",
            get(handlers::a001_project::export),
        )
        .route(
            "/api/projects/:team",
            get(handlers::a001_project::list_team).post(handlers::a001_project::create),
        )
        .route(
            "/api/projects/:team/statuses",
            get(handlers::a001_project::list_statuses),
        )
        .route(
            "/api/projects/:team/items/:project_number",
            put(handlers::a001_project::update).delete(handlers::a001_project::delete),
        )
        .route(
            "/api/projects/:team/import-excel",
            post(handlers::a001_project::import_excel)
                .layer(DefaultBodyLimit::max(IMPORT_BODY_LIMIT)),
        )
        // ========================================
        // D400 PROJECT SUMMARY
        // ========================================
        .route(
            "/api/d400/summary",
            get(handlers::d400_project_summary::get_organization_summary),
        )
        .route(
            "/api/d400/summary/:team",
            get(handlers::d400_project_summary::get_team_summary),
        )
        .with_state(state)
}
