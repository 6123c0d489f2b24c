use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use contracts::system::users::{LoginRequest, SessionInfo, User};

use crate::shared::state::AppState;
use crate::system::session;

/// GET /api/system/users
///
/// Демо-список пользователей для экрана входа
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.as_ref().clone())
}

/// Login handler. Any roster user is accepted without a password.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionInfo>, StatusCode> {
    let user = session::find_user(&state.users, &request.username)
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Login rejected: unknown user '{}'", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    let mut store = state.store.write().await;
    store.login(user);
    Ok(Json(session::session_info(store.current_user())))
}

/// Logout handler. Repeated calls are harmless.
pub async fn logout(State(state): State<AppState>) -> Json<SessionInfo> {
    let mut store = state.store.write().await;
    store.logout();
    Json(session::session_info(None))
}

/// Current session
pub async fn current_user(State(state): State<AppState>) -> Json<SessionInfo> {
    let store = state.store.read().await;
    Json(session::session_info(store.current_user()))
}
