use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::Team;
use crate::system::users::DashboardView;

/// Сводная статистика по списку проектов (KPI-карточки)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: usize,
    pub total_value: f64,
    /// status -> count. Unordered; consumers must not rely on key order.
    pub status_counts: HashMap<String, usize>,
    pub sales_rep_counts: HashMap<String, usize>,
    pub sales_rep_values: HashMap<String, f64>,
    pub submitted_count: usize,
    /// Rounded share of submitted projects, 0 for an empty list
    pub submitted_percent: u32,
    pub avg_project_value: f64,
    pub unique_sales_reps: usize,
}

/// One point of the monthly trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// First token of `executedDate`, e.g. "Jan"
    pub month: String,
    pub projects: usize,
    pub value: f64,
    pub value_thousands: i64,
}

/// One bar pair of the sales rep chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRepPoint {
    pub name: String,
    pub projects: usize,
    pub value: f64,
    pub value_thousands: i64,
}

/// Slice of the status pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: usize,
}

/// Row of the team comparison chart on the manager dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComparisonRow {
    pub team: Team,
    pub projects: usize,
    pub value: f64,
    /// `value` rendered as "$1,234.50" for the team card
    pub value_formatted: String,
    pub submitted: usize,
    pub value_thousands: i64,
}

/// Response for the organization-wide dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummaryResponse {
    pub stats: ProjectStats,
    /// KPI values rendered as "$1,234.50"
    pub total_value_formatted: String,
    pub avg_project_value_formatted: String,
    pub teams: Vec<TeamComparisonRow>,
    pub status_breakdown: Vec<StatusSlice>,
    pub sales_reps: Vec<SalesRepPoint>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

/// Response for a single team dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryResponse {
    pub team: Team,
    pub stats: ProjectStats,
    pub total_value_formatted: String,
    pub avg_project_value_formatted: String,
    pub status_breakdown: Vec<StatusSlice>,
    pub sales_reps: Vec<SalesRepPoint>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    /// Advisory: whether the current user may edit this team
    pub can_edit: bool,
    pub can_select_team: bool,
    pub view: DashboardView,
}
