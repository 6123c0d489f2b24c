use contracts::dashboards::d400_project_summary::{
    MonthlyTrendPoint, OrganizationSummaryResponse, ProjectStats, SalesRepPoint, StatusSlice,
    TeamComparisonRow, TeamSummaryResponse,
};
use contracts::domain::a001_project::{ProjectRecord, STATUS_SUBMITTED};
use contracts::enums::Team;
use contracts::shared::currency::{format_currency, parse_currency};
use contracts::system::users::{DashboardView, User};
use std::collections::HashMap;

use crate::domain::a001_project::ProjectStore;
use crate::system::session;

fn record_value(project: &ProjectRecord) -> f64 {
    parse_currency(&project.submitted_value_estimator)
}

/// Round to whole thousands for chart axes; halves round up (-2.5 -> -2)
fn to_thousands(value: f64) -> i64 {
    (value / 1000.0 + 0.5).floor() as i64
}

/// Calculate statistics for a list of projects
///
/// Pure: the input is never mutated and every call builds a fresh summary.
pub fn calculate_stats<'a, I>(projects: I) -> ProjectStats
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut stats = ProjectStats::default();

    for project in projects {
        let value = record_value(project);
        stats.total_projects += 1;
        stats.total_value += value;

        *stats
            .status_counts
            .entry(project.project_status.clone())
            .or_insert(0) += 1;
        *stats
            .sales_rep_counts
            .entry(project.sales_rep.clone())
            .or_insert(0) += 1;
        *stats
            .sales_rep_values
            .entry(project.sales_rep.clone())
            .or_insert(0.0) += value;
    }

    stats.submitted_count = stats
        .status_counts
        .get(STATUS_SUBMITTED)
        .copied()
        .unwrap_or(0);
    stats.submitted_percent = percent(stats.submitted_count, stats.total_projects);
    stats.avg_project_value = if stats.total_projects > 0 {
        stats.total_value / stats.total_projects as f64
    } else {
        0.0
    };
    stats.unique_sales_reps = stats.sales_rep_counts.len();

    stats
}

/// Rounded percentage, 0 when `total` is 0
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Группировка по месяцам: первый токен `executedDate`
///
/// Records without an executed date are left out. Buckets keep the order in
/// which each month first appears.
pub fn monthly_trend<'a, I>(projects: I) -> Vec<MonthlyTrendPoint>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, (usize, f64)> = HashMap::new();

    for project in projects {
        let Some(month) = project.executed_date.split_whitespace().next() else {
            continue;
        };
        if !buckets.contains_key(month) {
            order.push(month.to_string());
        }
        let bucket = buckets.entry(month.to_string()).or_insert((0, 0.0));
        bucket.0 += 1;
        bucket.1 += record_value(project);
    }

    order
        .into_iter()
        .map(|month| {
            let (projects, value) = buckets.get(&month).copied().unwrap_or((0, 0.0));
            MonthlyTrendPoint {
                month,
                projects,
                value,
                value_thousands: to_thousands(value),
            }
        })
        .collect()
}

/// Chart series per sales rep, sorted by rep name
pub fn sales_rep_series(stats: &ProjectStats) -> Vec<SalesRepPoint> {
    let mut names: Vec<&String> = stats.sales_rep_counts.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let value = stats.sales_rep_values.get(name).copied().unwrap_or(0.0);
            SalesRepPoint {
                name: name.clone(),
                projects: stats.sales_rep_counts[name],
                value,
                value_thousands: to_thousands(value),
            }
        })
        .collect()
}

/// Pie chart slices, largest first (ties by name)
pub fn status_breakdown(stats: &ProjectStats) -> Vec<StatusSlice> {
    let mut slices: Vec<StatusSlice> = stats
        .status_counts
        .iter()
        .map(|(name, value)| StatusSlice {
            name: name.clone(),
            value: *value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    slices
}

/// Строка сравнения команд для дашборда руководителя
pub fn team_comparison_row(team: Team, projects: &[ProjectRecord]) -> TeamComparisonRow {
    let value: f64 = projects.iter().map(record_value).sum();
    let submitted = projects
        .iter()
        .filter(|p| p.project_status == STATUS_SUBMITTED)
        .count();

    TeamComparisonRow {
        team,
        projects: projects.len(),
        value,
        value_formatted: format_currency(value),
        submitted,
        value_thousands: to_thousands(value),
    }
}

/// Дашборд руководителя: все команды вместе
pub fn build_organization_summary(store: &ProjectStore) -> OrganizationSummaryResponse {
    let all = store.get_all_projects();
    let records = all.iter().map(|p| &p.record);

    let stats = calculate_stats(records.clone());
    let teams = Team::all()
        .into_iter()
        .map(|team| team_comparison_row(team, store.get_team_projects(team)))
        .collect();

    tracing::debug!(
        "Organization summary: {} projects, total {:.2}",
        stats.total_projects,
        stats.total_value
    );

    OrganizationSummaryResponse {
        total_value_formatted: format_currency(stats.total_value),
        avg_project_value_formatted: format_currency(stats.avg_project_value),
        status_breakdown: status_breakdown(&stats),
        sales_reps: sales_rep_series(&stats),
        monthly_trend: monthly_trend(records),
        teams,
        stats,
    }
}

/// Дашборд одной команды с флагами для текущего пользователя
pub fn build_team_summary(
    store: &ProjectStore,
    team: Team,
    user: Option<&User>,
) -> TeamSummaryResponse {
    let projects = store.get_team_projects(team);
    let stats = calculate_stats(projects);

    TeamSummaryResponse {
        team,
        total_value_formatted: format_currency(stats.total_value),
        avg_project_value_formatted: format_currency(stats.avg_project_value),
        status_breakdown: status_breakdown(&stats),
        sales_reps: sales_rep_series(&stats),
        monthly_trend: monthly_trend(projects),
        stats,
        can_edit: session::can_edit(user, team),
        can_select_team: session::can_select_team(user),
        view: user
            .map(|u| session::default_view(u.role))
            .unwrap_or(DashboardView::Team),
    }
}
