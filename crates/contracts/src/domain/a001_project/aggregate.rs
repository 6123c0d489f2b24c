use serde::{Deserialize, Serialize};

use crate::enums::Team;

// ============================================================================
// Field enumeration
// ============================================================================

/// Поле проекта. Порядок вариантов совпадает с порядком колонок в Excel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    ProjectNumber,
    ProjectName,
    DriveLink,
    RecordedFrom,
    SalesRep,
    ScopeOfWork,
    GenContractor,
    ContactPerson,
    ExecutedDate,
    MmDdDate,
    MmOdDate,
    EstimatorName,
    DesignerName,
    ProjectStatus,
    SubmittedValueEstimator,
    #[serde(rename = "submittedValueSTM")]
    SubmittedValueStm,
    BidSubmitted,
    ProjectTrackerLink,
    Comments,
}

impl ProjectField {
    pub const ALL: [ProjectField; 19] = [
        ProjectField::ProjectNumber,
        ProjectField::ProjectName,
        ProjectField::DriveLink,
        ProjectField::RecordedFrom,
        ProjectField::SalesRep,
        ProjectField::ScopeOfWork,
        ProjectField::GenContractor,
        ProjectField::ContactPerson,
        ProjectField::ExecutedDate,
        ProjectField::MmDdDate,
        ProjectField::MmOdDate,
        ProjectField::EstimatorName,
        ProjectField::DesignerName,
        ProjectField::ProjectStatus,
        ProjectField::SubmittedValueEstimator,
        ProjectField::SubmittedValueStm,
        ProjectField::BidSubmitted,
        ProjectField::ProjectTrackerLink,
        ProjectField::Comments,
    ];
}

// ============================================================================
// Aggregate
// ============================================================================

/// Проект (одна строка трекера)
///
/// Every field is free text. Missing keys deserialize as empty strings, the
/// same as a blank spreadsheet cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub project_number: String,
    pub project_name: String,
    pub drive_link: String,
    pub recorded_from: String,
    pub sales_rep: String,
    pub scope_of_work: String,
    pub gen_contractor: String,
    pub contact_person: String,
    pub executed_date: String,
    pub mm_dd_date: String,
    pub mm_od_date: String,
    pub estimator_name: String,
    pub designer_name: String,
    pub project_status: String,
    pub submitted_value_estimator: String,
    #[serde(rename = "submittedValueSTM")]
    pub submitted_value_stm: String,
    pub bid_submitted: String,
    pub project_tracker_link: String,
    pub comments: String,
}

impl ProjectRecord {
    pub fn field(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::ProjectNumber => &self.project_number,
            ProjectField::ProjectName => &self.project_name,
            ProjectField::DriveLink => &self.drive_link,
            ProjectField::RecordedFrom => &self.recorded_from,
            ProjectField::SalesRep => &self.sales_rep,
            ProjectField::ScopeOfWork => &self.scope_of_work,
            ProjectField::GenContractor => &self.gen_contractor,
            ProjectField::ContactPerson => &self.contact_person,
            ProjectField::ExecutedDate => &self.executed_date,
            ProjectField::MmDdDate => &self.mm_dd_date,
            ProjectField::MmOdDate => &self.mm_od_date,
            ProjectField::EstimatorName => &self.estimator_name,
            ProjectField::DesignerName => &self.designer_name,
            ProjectField::ProjectStatus => &self.project_status,
            ProjectField::SubmittedValueEstimator => &self.submitted_value_estimator,
            ProjectField::SubmittedValueStm => &self.submitted_value_stm,
            ProjectField::BidSubmitted => &self.bid_submitted,
            ProjectField::ProjectTrackerLink => &self.project_tracker_link,
            ProjectField::Comments => &self.comments,
        }
    }

    pub fn field_mut(&mut self, field: ProjectField) -> &mut String {
        match field {
            ProjectField::ProjectNumber => &mut self.project_number,
            ProjectField::ProjectName => &mut self.project_name,
            ProjectField::DriveLink => &mut self.drive_link,
            ProjectField::RecordedFrom => &mut self.recorded_from,
            ProjectField::SalesRep => &mut self.sales_rep,
            ProjectField::ScopeOfWork => &mut self.scope_of_work,
            ProjectField::GenContractor => &mut self.gen_contractor,
            ProjectField::ContactPerson => &mut self.contact_person,
            ProjectField::ExecutedDate => &mut self.executed_date,
            ProjectField::MmDdDate => &mut self.mm_dd_date,
            ProjectField::MmOdDate => &mut self.mm_od_date,
            ProjectField::EstimatorName => &mut self.estimator_name,
            ProjectField::DesignerName => &mut self.designer_name,
            ProjectField::ProjectStatus => &mut self.project_status,
            ProjectField::SubmittedValueEstimator => &mut self.submitted_value_estimator,
            ProjectField::SubmittedValueStm => &mut self.submitted_value_stm,
            ProjectField::BidSubmitted => &mut self.bid_submitted,
            ProjectField::ProjectTrackerLink => &mut self.project_tracker_link,
            ProjectField::Comments => &mut self.comments,
        }
    }

    /// Применить частичное обновление: заменяются только поля, присутствующие в патче
    pub fn apply(&mut self, patch: &ProjectPatch) {
        for field in ProjectField::ALL {
            if let Some(value) = patch.get(field) {
                *self.field_mut(field) = value.to_string();
            }
        }
    }
}

/// Частичное обновление проекта
///
/// `None` leaves the stored value untouched. A `Some` project number re-keys
/// the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_of_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_contractor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mm_dd_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mm_od_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimator_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_value_estimator: Option<String>,
    #[serde(rename = "submittedValueSTM", skip_serializing_if = "Option::is_none")]
    pub submitted_value_stm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_submitted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_tracker_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl ProjectPatch {
    pub fn get(&self, field: ProjectField) -> Option<&str> {
        let value = match field {
            ProjectField::ProjectNumber => &self.project_number,
            ProjectField::ProjectName => &self.project_name,
            ProjectField::DriveLink => &self.drive_link,
            ProjectField::RecordedFrom => &self.recorded_from,
            ProjectField::SalesRep => &self.sales_rep,
            ProjectField::ScopeOfWork => &self.scope_of_work,
            ProjectField::GenContractor => &self.gen_contractor,
            ProjectField::ContactPerson => &self.contact_person,
            ProjectField::ExecutedDate => &self.executed_date,
            ProjectField::MmDdDate => &self.mm_dd_date,
            ProjectField::MmOdDate => &self.mm_od_date,
            ProjectField::EstimatorName => &self.estimator_name,
            ProjectField::DesignerName => &self.designer_name,
            ProjectField::ProjectStatus => &self.project_status,
            ProjectField::SubmittedValueEstimator => &self.submitted_value_estimator,
            ProjectField::SubmittedValueStm => &self.submitted_value_stm,
            ProjectField::BidSubmitted => &self.bid_submitted,
            ProjectField::ProjectTrackerLink => &self.project_tracker_link,
            ProjectField::Comments => &self.comments,
        };
        value.as_deref()
    }
}

/// Проект с меткой команды (только для сводного представления, не хранится)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProject {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub team: Team,
}

impl AsRef<ProjectRecord> for ProjectRecord {
    fn as_ref(&self) -> &ProjectRecord {
        self
    }
}

impl AsRef<ProjectRecord> for TeamProject {
    fn as_ref(&self) -> &ProjectRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"projectNumber":"P-1","submittedValueSTM":"$5"}"#).unwrap();
        assert_eq!(record.project_number, "P-1");
        assert_eq!(record.submitted_value_stm, "$5");
        assert_eq!(record.comments, "");
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut record = ProjectRecord {
            project_number: "P-001".into(),
            project_name: "Tower".into(),
            project_status: "HOD".into(),
            ..Default::default()
        };
        let patch = ProjectPatch {
            project_status: Some("Client".into()),
            ..Default::default()
        };
        record.apply(&patch);
        assert_eq!(record.project_status, "Client");
        assert_eq!(record.project_name, "Tower");
        assert_eq!(record.project_number, "P-001");
    }

    #[test]
    fn test_patch_empty_string_is_a_value() {
        assert!(ProjectField::ALL
            .iter()
            .all(|f| ProjectPatch::default().get(*f).is_none()));
        let patch: ProjectPatch = serde_json::from_str(r#"{"comments":""}"#).unwrap();
        assert_eq!(patch.get(ProjectField::Comments), Some(""));
    }

    #[test]
    fn test_team_project_flattens_record() {
        let tagged = TeamProject {
            record: ProjectRecord {
                project_number: "P-7".into(),
                ..Default::default()
            },
            team: Team::B,
        };
        let json = serde_json::to_value(&tagged).unwrap();
        assert_eq!(json["projectNumber"], "P-7");
        assert_eq!(json["team"], "B");
    }
}
