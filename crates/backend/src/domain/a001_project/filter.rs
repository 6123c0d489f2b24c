use contracts::domain::a001_project::{ProjectListQuery, ProjectRecord};
use contracts::enums::Team;

/// Status option that disables the status filter
pub const STATUS_ALL: &str = "All";

/// Фильтр таблицы проектов: строка поиска + статус
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    search: String,
    status: Option<String>,
}

impl ProjectFilter {
    pub fn new(search: Option<&str>, status: Option<&str>) -> Self {
        let status = status
            .filter(|s| *s != STATUS_ALL)
            .map(str::to_string);
        Self {
            search: search.unwrap_or_default().to_lowercase(),
            status,
        }
    }

    pub fn from_query(query: &ProjectListQuery) -> Self {
        Self::new(query.search.as_deref(), query.status.as_deref())
    }

    /// Case-insensitive search over number, name, sales rep and general
    /// contractor; exact status match unless the filter is "All".
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        let matches_search = self.search.is_empty()
            || [
                &project.project_number,
                &project.project_name,
                &project.sales_rep,
                &project.gen_contractor,
            ]
            .iter()
            .any(|value| value.to_lowercase().contains(&self.search));

        let matches_status = match &self.status {
            Some(status) => project.project_status == *status,
            None => true,
        };

        matches_search && matches_status
    }

    pub fn apply<'a, T, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: AsRef<ProjectRecord> + Clone + 'a,
    {
        items
            .into_iter()
            .filter(|item| self.matches(AsRef::<ProjectRecord>::as_ref(*item)))
            .cloned()
            .collect()
    }
}

/// Варианты для выпадающего списка статусов: "All" и статусы в порядке появления
pub fn status_options(projects: &[ProjectRecord]) -> Vec<String> {
    let mut options = vec![STATUS_ALL.to_string()];
    for project in projects {
        if !options[1..].contains(&project.project_status) {
            options.push(project.project_status.clone());
        }
    }
    options
}

/// Имя файла для выгрузки
pub fn export_filename(team: Option<Team>) -> String {
    match team {
        Some(team) => format!("Team_{}_Projects.xlsx", team),
        None => "Projects.xlsx".to_string(),
    }
}
