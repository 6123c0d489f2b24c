use contracts::domain::a001_project::{ProjectField, ProjectRecord, TeamProject, SHEET_NAME};

use crate::shared::excel::{self, ExcelError, ExcelExportable};

impl ExcelExportable for ProjectRecord {
    fn headers() -> Vec<&'static str> {
        ProjectField::ALL.iter().map(|f| f.header()).collect()
    }

    fn column_widths() -> Vec<u16> {
        ProjectField::ALL.iter().map(|f| f.width()).collect()
    }

    fn to_row(&self) -> Vec<String> {
        ProjectField::ALL
            .iter()
            .map(|f| self.field(*f).to_string())
            .collect()
    }
}

/// Team tag is not exported: the sheet carries the nineteen record columns only.
impl ExcelExportable for TeamProject {
    fn headers() -> Vec<&'static str> {
        ProjectRecord::headers()
    }

    fn column_widths() -> Vec<u16> {
        ProjectRecord::column_widths()
    }

    fn to_row(&self) -> Vec<String> {
        self.record.to_row()
    }
}

/// Выгрузка проектов в xlsx (лист "Projects")
pub fn export_to_excel<T: ExcelExportable>(projects: &[T]) -> Result<Vec<u8>, ExcelError> {
    let bytes = excel::write_xlsx(projects, SHEET_NAME)?;
    tracing::info!("Exported {} projects to xlsx ({} bytes)", projects.len(), bytes.len());
    Ok(bytes)
}

pub fn export_to_csv<T: ExcelExportable>(projects: &[T]) -> Result<Vec<u8>, ExcelError> {
    let bytes = excel::write_csv(projects)?;
    tracing::info!("Exported {} projects to csv", projects.len());
    Ok(bytes)
}
