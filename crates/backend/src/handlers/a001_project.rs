use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_project::{
    ImportResult, MutationResult, ProjectListQuery, ProjectPatch, ProjectRecord, TeamProject,
};
use contracts::enums::Team;
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_project::excel_import;
use crate::domain::a001_project::service::{self, ExportFormat};
use crate::shared::excel::ExcelError;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub team: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub format: Option<String>,
}

/// GET /api/projects
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Json<Vec<TeamProject>> {
    let store = state.store.read().await;
    Json(service::list_all(&store, &query))
}

/// GET /api/projects/:team
pub async fn list_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
    Query(query): Query<ProjectListQuery>,
) -> Json<Vec<ProjectRecord>> {
    let store = state.store.read().await;
    Json(service::list_team(&store, &team, &query))
}

/// GET /api/projects/:team/statuses
pub async fn list_statuses(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Json<Vec<String>> {
    let store = state.store.read().await;
    Json(service::team_status_options(&store, &team))
}

/// POST /api/projects/:team
pub async fn create(
    State(state): State<AppState>,
    Path(team): Path<String>,
    Json(record): Json<ProjectRecord>,
) -> Json<serde_json::Value> {
    let mut store = state.store.write().await;
    let number = service::create(&mut store, &team, record);
    let affected = usize::from(number.is_some());
    Json(json!({ "projectNumber": number, "affected": affected }))
}

/// PUT /api/projects/:team/items/:project_number
pub async fn update(
    State(state): State<AppState>,
    Path((team, project_number)): Path<(String, String)>,
    Json(patch): Json<ProjectPatch>,
) -> Json<MutationResult> {
    let mut store = state.store.write().await;
    Json(service::update(&mut store, &team, &project_number, &patch))
}

/// DELETE /api/projects/:team/items/:project_number
pub async fn delete(
    State(state): State<AppState>,
    Path((team, project_number)): Path<(String, String)>,
) -> Json<MutationResult> {
    let mut store = state.store.write().await;
    Json(service::delete(&mut store, &team, &project_number))
}

/// GET /api/projects/export
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, StatusCode> {
    let format = ExportFormat::from_param(query.format.as_deref());
    let filter = ProjectListQuery {
        search: query.search,
        status: query.status,
    };

    let store = state.store.read().await;
    let file = service::export(&store, query.team.as_deref(), &filter, format).map_err(|e| {
        tracing::error!("Failed to export projects: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}

/// POST /api/projects/:team/import-excel
pub async fn import_excel(
    State(state): State<AppState>,
    Path(team): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ImportResult>, StatusCode> {
    let team = Team::from_code(&team).ok_or_else(|| {
        tracing::warn!("Import rejected: unknown team '{}'", team);
        StatusCode::BAD_REQUEST
    })?;
    let bytes = read_upload(&mut multipart).await?;
    import_bytes(&state, team, bytes).await.map(Json)
}

/// Первое файловое поле multipart-запроса
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, StatusCode> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart: {}", e);
        StatusCode::BAD_REQUEST
    })? {
        if field.name() == Some("file") || field.file_name().is_some() {
            let data = field.bytes().await.map_err(|e| {
                tracing::error!("Failed to read uploaded file: {}", e);
                StatusCode::BAD_REQUEST
            })?;
            return Ok(data.to_vec());
        }
    }
    tracing::warn!("Import rejected: no file field in upload");
    Err(StatusCode::BAD_REQUEST)
}

async fn import_bytes(
    state: &AppState,
    team: Team,
    bytes: Vec<u8>,
) -> Result<ImportResult, StatusCode> {
    let parsed = excel_import::import_from_excel_bytes(bytes)
        .await
        .map_err(|e| {
            tracing::error!("Failed to import projects into team {}: {}", team, e);
            match e {
                ExcelError::Parse(_) | ExcelError::NoSheet => StatusCode::BAD_REQUEST,
                ExcelError::Read(_) | ExcelError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        })?;

    let mut store = state.store.write().await;
    Ok(service::import_parsed(&mut store, team, parsed))
}
