// CSV upload decoding and validation
use crate::domain::sales::{SalesRecord, SalesTable, REQUIRED_COLUMNS};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Reasons an upload is rejected. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file uploaded.")]
    NoFile,
    #[error("Please upload a CSV file.")]
    BadExtension,
    #[error("CSV must have columns: date, region, product, sales.")]
    MissingColumns,
    #[error("Error processing file: {0}.")]
    ParseError(String),
}

impl From<csv::Error> for UploadError {
    fn from(e: csv::Error) -> Self {
        UploadError::ParseError(e.to_string())
    }
}

/// Decode a `"<meta>,<base64>"` upload payload into a sales table.
pub fn parse_upload(contents: Option<&str>, filename: Option<&str>) -> Result<SalesTable, UploadError> {
    let contents = match contents {
        Some(c) if !c.is_empty() => c,
        _ => return Err(UploadError::NoFile),
    };

    if !filename.is_some_and(|f| f.ends_with(".csv")) {
        return Err(UploadError::BadExtension);
    }

    let (_meta, payload) = contents
        .split_once(',')
        .ok_or_else(|| UploadError::ParseError("upload is not a data URL".to_string()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| UploadError::ParseError(format!("invalid base64 payload: {}", e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| UploadError::ParseError(format!("file is not valid UTF-8: {}", e)))?;

    parse_csv_text(&text)
}

/// Parse CSV text with a header row into a sales table. Extra columns are ignored.
pub fn parse_csv_text(text: &str) -> Result<SalesTable, UploadError> {
    if text.trim().is_empty() {
        return Err(UploadError::ParseError("No columns to parse from file".to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let position = |name: &str| columns.iter().position(|c| c == name);
    let (Some(date_idx), Some(region_idx), Some(product_idx), Some(sales_idx)) = (
        position(REQUIRED_COLUMNS[0]),
        position(REQUIRED_COLUMNS[1]),
        position(REQUIRED_COLUMNS[2]),
        position(REQUIRED_COLUMNS[3]),
    ) else {
        return Err(UploadError::MissingColumns);
    };

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        // Blank cells are missing values, not errors.
        let raw_sales = field(sales_idx).trim();
        let sales = if raw_sales.is_empty() {
            None
        } else {
            let value: f64 = raw_sales.parse().map_err(|_| {
                // Header is line 1, so data row N sits on line N + 2.
                UploadError::ParseError(format!(
                    "invalid sales value '{}' on line {}",
                    raw_sales,
                    row + 2
                ))
            })?;
            Some(value)
        };

        records.push(SalesRecord::new(
            field(date_idx),
            field(region_idx),
            field(product_idx),
            sales,
        ));
    }

    tracing::debug!("Parsed {} sales records across {} columns", records.len(), columns.len());
    Ok(SalesTable::new(columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_url(csv: &str) -> String {
        format!("data:text/csv;base64,{}", STANDARD.encode(csv))
    }

    #[test]
    fn test_parse_valid_upload() {
        let contents = data_url("date,region,product,sales\n2024-01-01,East,Widget,100\n2024-01-02,West,Gadget,99.5\n");

        let table = parse_upload(Some(&contents), Some("sales.csv")).unwrap();

        for column in REQUIRED_COLUMNS {
            assert!(table.has_column(column));
        }
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], SalesRecord::new("2024-01-01", "East", "Widget", 100.0));
        assert_eq!(table.records()[1].sales, Some(99.5));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let contents = data_url("id,sales,product,notes,region,date\n1,10,Widget,promo,East,2024-03-01\n");

        let table = parse_upload(Some(&contents), Some("q1.csv")).unwrap();

        assert_eq!(table.columns().len(), 6);
        assert_eq!(table.records()[0], SalesRecord::new("2024-03-01", "East", "Widget", 10.0));
    }

    #[test]
    fn test_no_file() {
        assert_eq!(parse_upload(None, Some("sales.csv")), Err(UploadError::NoFile));
        assert_eq!(parse_upload(Some(""), Some("sales.csv")), Err(UploadError::NoFile));
        assert_eq!(UploadError::NoFile.to_string(), "No file uploaded.");
    }

    #[test]
    fn test_bad_extension_regardless_of_content() {
        let valid = data_url("date,region,product,sales\n2024-01-01,East,Widget,100\n");

        for filename in ["sales.txt", "sales.CSV", "sales.csv.bak", "csv"] {
            assert_eq!(
                parse_upload(Some(&valid), Some(filename)),
                Err(UploadError::BadExtension),
                "{filename}"
            );
        }
        assert_eq!(parse_upload(Some("garbage"), None), Err(UploadError::BadExtension));
        assert_eq!(UploadError::BadExtension.to_string(), "Please upload a CSV file.");
    }

    #[test]
    fn test_missing_columns_names_all_required() {
        let contents = data_url("date,region,sales\n2024-01-01,East,100\n");

        let err = parse_upload(Some(&contents), Some("sales.csv")).unwrap_err();

        assert_eq!(err, UploadError::MissingColumns);
        let message = err.to_string();
        for column in REQUIRED_COLUMNS {
            assert!(message.contains(column), "{message}");
        }
    }

    #[test]
    fn test_parse_errors_carry_cause() {
        let not_base64 = parse_upload(Some("data:text/csv;base64,@@@"), Some("a.csv")).unwrap_err();
        assert!(matches!(not_base64, UploadError::ParseError(_)));
        assert!(not_base64.to_string().starts_with("Error processing file: "));

        let no_comma = parse_upload(Some("nocommahere"), Some("a.csv")).unwrap_err();
        assert!(matches!(no_comma, UploadError::ParseError(_)));

        let latin1 = format!("data:text/csv;base64,{}", STANDARD.encode([0xff, 0xfe, 0x41]));
        let err = parse_upload(Some(&latin1), Some("a.csv")).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));

        let empty = format!("data:text/csv;base64,{}", STANDARD.encode(""));
        let err = parse_upload(Some(&empty), Some("a.csv")).unwrap_err();
        assert!(err.to_string().contains("No columns to parse"));
    }

    #[test]
    fn test_non_numeric_sales_is_a_parse_error() {
        let err = parse_csv_text("date,region,product,sales\n2024-01-01,East,Widget,lots\n").unwrap_err();

        assert_eq!(
            err,
            UploadError::ParseError("invalid sales value 'lots' on line 2".to_string())
        );
    }

    #[test]
    fn test_blank_sales_is_a_missing_value() {
        let table = parse_csv_text("date,region,product,sales\n2024-01-01,East,Widget,\n2024-01-02,East,Widget, \n2024-01-03,East,Widget,5\n").unwrap();

        let sales: Vec<Option<f64>> = table.records().iter().map(|r| r.sales).collect();
        assert_eq!(sales, vec![None, None, Some(5.0)]);
    }

    #[test]
    fn test_ragged_rows_are_a_parse_error() {
        let err = parse_csv_text("date,region,product,sales\n2024-01-01,East,Widget\n").unwrap_err();
        assert!(matches!(err, UploadError::ParseError(_)));
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let table = parse_csv_text("date,region,product,sales\n").unwrap();
        assert!(table.is_empty());
        assert!(table.has_column("sales"));
    }
}
