//! CSV adapters for the material table

use crate::error::BatchError;
use klartext_domain::MaterialRecord;
use std::path::Path;

/// One input row's relevant columns
///
/// Column index 2 carries the material reference (checked for presence
/// only), column index 3 the raw description text. Short rows yield empty
/// strings for the missing columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    /// Material reference from column index 2
    pub reference: String,

    /// Raw description text from column index 3
    pub description: String,
}

impl MaterialRow {
    /// Create a row from its two relevant columns
    pub fn new(reference: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            description: description.into(),
        }
    }

    /// Extract the relevant columns from a CSV record
    pub fn from_record(record: &csv::StringRecord) -> Self {
        Self {
            reference: record.get(2).unwrap_or("").to_string(),
            description: record.get(3).unwrap_or("").to_string(),
        }
    }
}

/// Read all material rows from a CSV file
///
/// The first line is treated as a header. Records of differing lengths are
/// accepted; short rows get empty columns. The outer `Result` is fatal
/// (table unreadable), the per-row `Result`s feed the runner's row
/// isolation.
pub fn read_rows(path: &Path) -> Result<Vec<Result<MaterialRow, BatchError>>, BatchError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    Ok(reader
        .records()
        .map(|record| {
            record
                .map(|r| MaterialRow::from_record(&r))
                .map_err(BatchError::from)
        })
        .collect())
}

/// Write processed records to a CSV file, one row per input row
pub fn write_records(path: &Path, records: &[MaterialRecord]) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "original_text",
        "cleaned_text",
        "structured_info",
        "final_description",
        "error",
    ])?;

    for record in records {
        let structured_info = match &record.structured_info {
            Some(info) => serde_json::to_string(info)?,
            None => String::new(),
        };

        writer.write_record([
            record.original_text.as_str(),
            record.cleaned_text.as_str(),
            structured_info.as_str(),
            record.final_description.as_str(),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use klartext_domain::ProductInfo;
    use std::io::Write;

    #[test]
    fn test_row_from_full_record() {
        let record = csv::StringRecord::from(vec!["id", "plant", "100076", "Siemens Schütz"]);
        let row = MaterialRow::from_record(&record);
        assert_eq!(row.reference, "100076");
        assert_eq!(row.description, "Siemens Schütz");
    }

    #[test]
    fn test_short_record_yields_empty_columns() {
        let record = csv::StringRecord::from(vec!["id", "plant"]);
        let row = MaterialRow::from_record(&record);
        assert_eq!(row.reference, "");
        assert_eq!(row.description, "");
    }

    #[test]
    fn test_read_rows_skips_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,plant,reference,description").unwrap();
        writeln!(file, "1,A,100076,Siemens Schütz").unwrap();
        writeln!(file, "2,A,100077,\"Kugellager | 6204\"").unwrap();
        file.flush().unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_ref().unwrap().description, "Siemens Schütz");
        assert_eq!(rows[1].as_ref().unwrap().description, "Kugellager | 6204");
    }

    #[test]
    fn test_read_rows_accepts_ragged_lengths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,plant,reference,description").unwrap();
        writeln!(file, "1,A").unwrap();
        writeln!(file, "2,A,100078,Dichtung,extra").unwrap();
        file.flush().unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_ref().unwrap().description, "");
        assert_eq!(rows[1].as_ref().unwrap().description, "Dichtung");
    }

    #[test]
    fn test_write_records_round_trip() {
        let records = vec![
            MaterialRecord {
                original_text: "Siemens Schütz".to_string(),
                cleaned_text: "Siemens Schütz".to_string(),
                structured_info: Some(ProductInfo {
                    product_name: "Siemens Schütz".to_string(),
                    short_description: "Siemens Schütz".to_string(),
                    ..Default::default()
                }),
                final_description: "Siemens Schütz".to_string(),
                error: None,
            },
            MaterialRecord::failed("kaputt".to_string(), String::new(), "boom".to_string()),
        ];

        let file = tempfile::NamedTempFile::new().unwrap();
        write_records(file.path(), &records).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec![
                "original_text",
                "cleaned_text",
                "structured_info",
                "final_description",
                "error"
            ])
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].get(2).unwrap().contains("\"product_name\":\"Siemens Schütz\""));
        assert_eq!(rows[0].get(4).unwrap(), "");
        assert_eq!(rows[1].get(3).unwrap(), "ERROR");
        assert_eq!(rows[1].get(4).unwrap(), "boom");
    }
}
