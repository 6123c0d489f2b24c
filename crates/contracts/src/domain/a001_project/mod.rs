pub mod aggregate;
pub mod excel;

pub use aggregate::{ProjectField, ProjectPatch, ProjectRecord, TeamProject};
pub use excel::{ImportResult, SHEET_NAME};

use serde::{Deserialize, Serialize};

pub const STATUS_SUBMITTED: &str = "Submitted";

/// Query parameters of the project table (search box + status dropdown)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

/// Result of a store mutation. `affected == 0` means nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    pub affected: usize,
}
