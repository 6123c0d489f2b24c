//! Универсальный модуль чтения/записи Excel и CSV

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Cursor;
use thiserror::Error;

/// Ошибки чтения/записи таблиц
#[derive(Debug, Error)]
pub enum ExcelError {
    #[error("Cannot read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Cannot parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    #[error("Workbook has no sheets")]
    NoSheet,

    #[error("Cannot write spreadsheet: {0}")]
    Write(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExcelError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExcelError::Write(e.to_string())
    }
}

impl From<csv::Error> for ExcelError {
    fn from(e: csv::Error) -> Self {
        ExcelError::Write(e.to_string())
    }
}

/// Trait для типов, которые могут быть экспортированы в Excel
pub trait ExcelExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Ширина колонок в символах, по одной на заголовок
    fn column_widths() -> Vec<u16>;

    /// Преобразует объект в массив значений
    fn to_row(&self) -> Vec<String>;
}

/// Прочитанный лист: заголовки + строки «заголовок -> значение»
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcelData {
    pub metadata: ExcelMetadata,
    pub rows: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcelMetadata {
    pub columns: Vec<String>,
    pub row_count: usize,
    pub sheet_name: String,
}

/// Записывает данные в xlsx (один лист) и возвращает байты файла
pub fn write_xlsx<T: ExcelExportable>(data: &[T], sheet_name: &str) -> Result<Vec<u8>, ExcelError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, (header, width)) in T::headers()
        .into_iter()
        .zip(T::column_widths())
        .enumerate()
    {
        let col = col as u16;
        worksheet.write_string(0, col, header)?;
        worksheet.set_column_width(col, width)?;
    }

    for (i, item) in data.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in item.to_row().iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// CSV с разделителем `;` и UTF-8 BOM, чтобы Excel открывал его без мастера импорта
pub fn write_csv<T: ExcelExportable>(data: &[T]) -> Result<Vec<u8>, ExcelError> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice("\u{FEFF}".as_bytes());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(buffer);
    writer.write_record(T::headers())?;
    for item in data {
        writer.write_record(item.to_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| ExcelError::Write(e.to_string()))
}

/// Читает первый лист из байтов (загрузка через multipart)
pub fn read_first_sheet_from_bytes(bytes: Vec<u8>) -> Result<ExcelData, ExcelError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ExcelError::NoSheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;
    Ok(range_to_data(&range, sheet_name))
}

/// First row is the header row. Blank rows are skipped.
fn range_to_data(range: &Range<Data>, sheet_name: String) -> ExcelData {
    let mut rows_iter = range.rows();
    let columns: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut values = HashMap::new();
        for (header, cell) in columns.iter().zip(row.iter()) {
            let value = cell_to_string(cell);
            if header.is_empty() || value.is_empty() {
                continue;
            }
            values.insert(header.clone(), value);
        }
        if !values.is_empty() {
            rows.push(values);
        }
    }

    ExcelData {
        metadata: ExcelMetadata {
            columns,
            row_count: rows.len(),
            sheet_name,
        },
        rows,
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl ExcelExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn column_widths() -> Vec<u16> {
            vec![20, 12]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_csv_has_bom_and_semicolons() {
        let bytes = write_csv(&[Row("Tower; phase 1", "$1,000.00")]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with('\u{FEFF}'));
        let mut lines = text.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(lines.next(), Some("Name;Amount"));
        assert_eq!(lines.next(), Some("\"Tower; phase 1\";$1,000.00"));
    }

    #[test]
    fn test_xlsx_roundtrip_through_reader() {
        let bytes = write_xlsx(&[Row("Tower", "$5"), Row("", "$7")], "Projects").unwrap();
        let data = read_first_sheet_from_bytes(bytes).unwrap();
        assert_eq!(data.metadata.sheet_name, "Projects");
        assert_eq!(data.metadata.columns, vec!["Name", "Amount"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0]["Name"], "Tower");
        assert!(!data.rows[1].contains_key("Name"));
        assert_eq!(data.rows[1]["Amount"], "$7");
    }

    #[test]
    fn test_garbage_bytes_is_parse_error() {
        let result = read_first_sheet_from_bytes(b"not a spreadsheet".to_vec());
        assert!(matches!(result, Err(ExcelError::Parse(_))));
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Float(12345.0)), "12345");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
