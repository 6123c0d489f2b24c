use serde::{Deserialize, Serialize};

use super::aggregate::ProjectField;

/// Name of the single sheet written on export.
pub const SHEET_NAME: &str = "Projects";

impl ProjectField {
    /// Заголовок колонки в Excel
    pub fn header(&self) -> &'static str {
        match self {
            ProjectField::ProjectNumber => "Project Number",
            ProjectField::ProjectName => "Project Name",
            ProjectField::DriveLink => "Drive Link",
            ProjectField::RecordedFrom => "Recorded From",
            ProjectField::SalesRep => "Sales Rep",
            ProjectField::ScopeOfWork => "Scope of Work",
            ProjectField::GenContractor => "Gen. Contractor",
            ProjectField::ContactPerson => "Contact Person",
            ProjectField::ExecutedDate => "Executed Date",
            ProjectField::MmDdDate => "MM-D-D Date",
            ProjectField::MmOdDate => "MM-OD Date",
            ProjectField::EstimatorName => "Estimator Name",
            ProjectField::DesignerName => "Designer Name",
            ProjectField::ProjectStatus => "Project Status",
            ProjectField::SubmittedValueEstimator => "Project Submitted Value by Estimator",
            ProjectField::SubmittedValueStm => "Project Submitted Value by STM/Ruch/Pooja",
            ProjectField::BidSubmitted => "Bid Submitted",
            ProjectField::ProjectTrackerLink => "Project Tracker Link",
            ProjectField::Comments => "Comments/Remarks",
        }
    }

    /// Ширина колонки в символах
    pub fn width(&self) -> u16 {
        match self {
            ProjectField::ProjectNumber => 15,
            ProjectField::ProjectName => 35,
            ProjectField::DriveLink => 15,
            ProjectField::RecordedFrom => 15,
            ProjectField::SalesRep => 20,
            ProjectField::ScopeOfWork => 25,
            ProjectField::GenContractor => 25,
            ProjectField::ContactPerson => 20,
            ProjectField::ExecutedDate
            | ProjectField::MmDdDate
            | ProjectField::MmOdDate
            | ProjectField::EstimatorName
            | ProjectField::DesignerName => 18,
            ProjectField::ProjectStatus => 15,
            ProjectField::SubmittedValueEstimator
            | ProjectField::SubmittedValueStm
            | ProjectField::BidSubmitted
            | ProjectField::ProjectTrackerLink => 20,
            ProjectField::Comments => 30,
        }
    }
}

/// Результат импорта
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub imported_count: usize,
    pub team: crate::enums::Team,
    /// Headers from the file that did not match any known column.
    pub unknown_headers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_unique() {
        let mut headers: Vec<&str> = ProjectField::ALL.iter().map(|f| f.header()).collect();
        headers.sort();
        headers.dedup();
        assert_eq!(headers.len(), ProjectField::ALL.len());
    }

    #[test]
    fn test_column_widths() {
        let widths: Vec<u16> = ProjectField::ALL.iter().map(|f| f.width()).collect();
        assert_eq!(
            widths,
            vec![15, 35, 15, 15, 20, 25, 25, 20, 18, 18, 18, 18, 18, 15, 20, 20, 20, 20, 30]
        );
    }
}
