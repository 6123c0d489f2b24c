use contracts::domain::a001_project::{
    ImportResult, MutationResult, ProjectListQuery, ProjectPatch, ProjectRecord, TeamProject,
};
use contracts::enums::Team;
use uuid::Uuid;

use super::excel_export;
use super::excel_import::ParsedSheet;
use super::filter::{self, ProjectFilter};
use super::store::ProjectStore;
use crate::shared::excel::ExcelError;

/// Формат выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv;charset=utf-8",
        }
    }
}

/// Готовый файл выгрузки
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Все проекты (с меткой команды) с учетом фильтра таблицы
pub fn list_all(store: &ProjectStore, query: &ProjectListQuery) -> Vec<TeamProject> {
    ProjectFilter::from_query(query).apply(&store.get_all_projects())
}

/// Проекты команды; неизвестная команда -> пустой список
pub fn list_team(store: &ProjectStore, team: &str, query: &ProjectListQuery) -> Vec<ProjectRecord> {
    ProjectFilter::from_query(query).apply(store.get_team_projects_by_name(team))
}

/// Варианты фильтра статусов для таблицы команды
pub fn team_status_options(store: &ProjectStore, team: &str) -> Vec<String> {
    filter::status_options(store.get_team_projects_by_name(team))
}

/// Добавление проекта. An empty project number gets a generated one.
/// Returns the stored number, or `None` for an unknown team.
pub fn create(store: &mut ProjectStore, team: &str, mut record: ProjectRecord) -> Option<String> {
    let team = Team::from_code(team)?;
    if record.project_number.trim().is_empty() {
        record.project_number = generate_project_number();
    }
    let number = record.project_number.clone();
    store.add_project(team, record);
    Some(number)
}

pub fn update(
    store: &mut ProjectStore,
    team: &str,
    project_number: &str,
    patch: &ProjectPatch,
) -> MutationResult {
    let affected = match Team::from_code(team) {
        Some(team) => store.update_project(team, project_number, patch),
        None => 0,
    };
    MutationResult { affected }
}

pub fn delete(store: &mut ProjectStore, team: &str, project_number: &str) -> MutationResult {
    let affected = match Team::from_code(team) {
        Some(team) => store.delete_project(team, project_number),
        None => 0,
    };
    MutationResult { affected }
}

/// Appends parsed rows to the team collection
pub fn import_parsed(store: &mut ProjectStore, team: Team, parsed: ParsedSheet) -> ImportResult {
    let imported_count = store.append_projects(team, parsed.projects);
    ImportResult {
        imported_count,
        team,
        unknown_headers: parsed.unknown_headers,
    }
}

/// Выгрузка отфильтрованных проектов: одна команда или все
pub fn export(
    store: &ProjectStore,
    team: Option<&str>,
    query: &ProjectListQuery,
    format: ExportFormat,
) -> Result<ExportFile, ExcelError> {
    let team = team.and_then(Team::from_code);
    let project_filter = ProjectFilter::from_query(query);

    let bytes = match team {
        Some(team) => {
            let projects = project_filter.apply(store.get_team_projects(team));
            write(&projects, format)?
        }
        None => {
            let projects = project_filter.apply(&store.get_all_projects());
            write(&projects, format)?
        }
    };

    let mut filename = filter::export_filename(team);
    if format == ExportFormat::Csv {
        filename = filename.replace(".xlsx", ".csv");
    }

    Ok(ExportFile {
        filename,
        content_type: format.content_type(),
        bytes,
    })
}

fn write<T: crate::shared::excel::ExcelExportable>(
    projects: &[T],
    format: ExportFormat,
) -> Result<Vec<u8>, ExcelError> {
    match format {
        ExportFormat::Xlsx => excel_export::export_to_excel(projects),
        ExportFormat::Csv => excel_export::export_to_csv(projects),
    }
}

fn generate_project_number() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("P-{}", id[..8].to_uppercase())
}
