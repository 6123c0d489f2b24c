use contracts::domain::a001_project::{ProjectField, ProjectRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::shared::excel::{self, ExcelData, ExcelError};

/// Заголовок колонки -> поле проекта
static HEADER_INDEX: Lazy<HashMap<&'static str, ProjectField>> = Lazy::new(|| {
    ProjectField::ALL
        .into_iter()
        .map(|field| (field.header(), field))
        .collect()
});

/// Проекты, прочитанные из первого листа
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub projects: Vec<ProjectRecord>,
    pub unknown_headers: Vec<String>,
}

/// Converts sheet rows into records. Missing columns become empty strings.
pub fn rows_to_projects(data: &ExcelData) -> Vec<ProjectRecord> {
    data.rows
        .iter()
        .map(|row| {
            let mut record = ProjectRecord::default();
            for (header, value) in row {
                if let Some(field) = HEADER_INDEX.get(header.as_str()) {
                    *record.field_mut(*field) = value.clone();
                }
            }
            record
        })
        .collect()
}

/// Headers present in the file that match no known column
pub fn unknown_headers(data: &ExcelData) -> Vec<String> {
    data.metadata
        .columns
        .iter()
        .filter(|h| !h.is_empty() && !HEADER_INDEX.contains_key(h.as_str()))
        .cloned()
        .collect()
}

/// Импорт проектов из загруженного файла. Parsing runs on the blocking pool.
pub async fn import_from_excel_bytes(
    bytes: Vec<u8>,
) -> Result<ParsedSheet, ExcelError> {
    let data = tokio::task::spawn_blocking(move || excel::read_first_sheet_from_bytes(bytes))
        .await
        .map_err(|e| ExcelError::Read(std::io::Error::other(e)))??;
    Ok(finish_import(data))
}

fn finish_import(data: ExcelData) -> ParsedSheet {
    let projects = rows_to_projects(&data);
    let unknown = unknown_headers(&data);
    tracing::info!(
        "Parsed {} projects from sheet '{}'",
        projects.len(),
        data.metadata.sheet_name
    );
    if !unknown.is_empty() {
        tracing::warn!("Ignored unknown columns: {:?}", unknown);
    }
    ParsedSheet {
        projects,
        unknown_headers: unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::excel_export::export_to_excel;
    use crate::shared::excel::ExcelMetadata;

    fn sheet(columns: &[&str], rows: Vec<Vec<(&str, &str)>>) -> ExcelData {
        let rows: Vec<HashMap<String, String>> = rows
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect();
        ExcelData {
            metadata: ExcelMetadata {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                row_count: rows.len(),
                sheet_name: "Sheet1".into(),
            },
            rows,
        }
    }

    #[test]
    fn test_missing_headers_default_to_empty() {
        let data = sheet(
            &["Project Number", "Project Status", "Notes"],
            vec![vec![
                ("Project Number", "P-9"),
                ("Project Status", "HOD"),
                ("Notes", "ignored"),
            ]],
        );
        let projects = rows_to_projects(&data);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_number, "P-9");
        assert_eq!(projects[0].project_status, "HOD");
        assert_eq!(projects[0].project_name, "");
        assert_eq!(projects[0].comments, "");
        assert_eq!(unknown_headers(&data), vec!["Notes"]);
    }

    #[tokio::test]
    async fn test_export_then_import_keeps_all_fields() {
        let mut record = ProjectRecord::default();
        for (i, field) in ProjectField::ALL.into_iter().enumerate() {
            *record.field_mut(field) = format!("value {}", i);
        }
        record.submitted_value_estimator = "$12,345.67".into();

        let bytes = export_to_excel(&[record.clone()]).unwrap();

        let parsed = import_from_excel_bytes(bytes).await.unwrap();
        assert!(parsed.unknown_headers.is_empty());
        assert_eq!(parsed.projects, vec![record]);
    }

    #[tokio::test]
    async fn test_import_failure_is_propagated() {
        let result = import_from_excel_bytes(b"PK\x03\x04broken".to_vec()).await;
        assert!(result.is_err());
        let result = import_from_excel_bytes(Vec::new()).await;
        assert!(matches!(result, Err(ExcelError::Parse(_))));
    }
}
