//! Severity table loading.
//!
//! The table is read either as JSON (an array of row objects, or the
//! column-oriented layout pandas writes by default) or as CSV with a
//! header row. Extra columns are ignored in every format.

use std::collections::BTreeMap;
use std::path::Path;

use accident_map_accident_models::SeverityRecord;
use accident_map_accident_models::whole_number::{deserialize_code, deserialize_count};
use serde::Deserialize;

use crate::LoadError;

/// Reads the severity table at `path`, picking the format by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_severity(path: &Path) -> Result<Vec<SeverityRecord>, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<Vec<SeverityRecord>, LoadError> = match extension.as_deref() {
        Some("json") => parse_severity_json,
        Some("csv") => parse_severity_csv,
        _ => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::from(e).in_file(path))?;
    let records = parse(&contents).map_err(|e| e.in_file(path))?;
    log::info!(
        "Loaded {} severity records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[derive(Deserialize)]
struct Code(#[serde(deserialize_with = "deserialize_code")] i64);

#[derive(Deserialize)]
struct Count(#[serde(deserialize_with = "deserialize_count")] u64);

/// Column-oriented JSON: each column maps a row key to a value.
#[derive(Deserialize)]
struct SeverityColumns {
    #[serde(rename = "LGA_NAME")]
    lga_name: BTreeMap<String, String>,
    #[serde(rename = "SEVERITY")]
    severity: BTreeMap<String, Code>,
    #[serde(rename = "ACCIDENT_NO")]
    accident_count: BTreeMap<String, Count>,
}

/// Parses a JSON severity table.
///
/// # Errors
///
/// Returns an error if the JSON is neither an array of rows nor a
/// column-oriented object, or if the columns disagree on their row keys.
pub fn parse_severity_json(contents: &str) -> Result<Vec<SeverityRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;

    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => from_columns(serde_json::from_value(value)?),
        _ => Err(LoadError::invalid(
            "expected an array of rows or an object of columns",
        )),
    }
}

fn from_columns(columns: SeverityColumns) -> Result<Vec<SeverityRecord>, LoadError> {
    let SeverityColumns {
        lga_name,
        mut severity,
        mut accident_count,
    } = columns;

    if !lga_name.keys().eq(severity.keys()) || !lga_name.keys().eq(accident_count.keys()) {
        return Err(LoadError::invalid(
            "columns LGA_NAME, SEVERITY and ACCIDENT_NO have different row keys",
        ));
    }

    let mut rows = lga_name
        .into_iter()
        .map(|(key, name)| {
            let position: u64 = key
                .parse()
                .map_err(|_| LoadError::invalid(format!("row key {key:?} is not an integer")))?;
            let record = SeverityRecord {
                lga_name: name,
                severity: severity.remove(&key).map_or(0, |Code(code)| code),
                accident_count: accident_count.remove(&key).map_or(0, |Count(count)| count),
            };
            Ok((position, record))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    rows.sort_by_key(|(position, _)| *position);

    Ok(rows.into_iter().map(|(_, record)| record).collect())
}

/// Parses a CSV severity table with a header row.
///
/// # Errors
///
/// Returns an error if any row is missing a required column or has a
/// non-numeric code or count.
pub fn parse_severity_csv(contents: &str) -> Result<Vec<SeverityRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    reader
        .deserialize::<SeverityRecord>()
        .map(|row| row.map_err(LoadError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lga: &str, severity: i64, count: u64) -> SeverityRecord {
        SeverityRecord {
            lga_name: lga.to_string(),
            severity,
            accident_count: count,
        }
    }

    #[test]
    fn parses_row_oriented_json() {
        let json = r#"[
            {"LGA_NAME": "ALPINE", "SEVERITY": 1, "ACCIDENT_NO": 10, "YEAR": 2020},
            {"LGA_NAME": "BALLARAT", "SEVERITY": 3, "ACCIDENT_NO": 2}
        ]"#;
        assert_eq!(
            parse_severity_json(json).unwrap(),
            vec![record("ALPINE", 1, 10), record("BALLARAT", 3, 2)]
        );
    }

    #[test]
    fn parses_column_oriented_json_in_row_key_order() {
        let json = r#"{
            "LGA_NAME": {"10": "CASEY", "2": "BALLARAT", "0": "ALPINE"},
            "SEVERITY": {"0": 1, "2": 2, "10": 3},
            "ACCIDENT_NO": {"0": 5, "2": 6, "10": 7},
            "OTHER": {"0": null}
        }"#;
        assert_eq!(
            parse_severity_json(json).unwrap(),
            vec![
                record("ALPINE", 1, 5),
                record("BALLARAT", 2, 6),
                record("CASEY", 3, 7),
            ]
        );
    }

    #[test]
    fn accepts_integral_floats_in_rows() {
        let json = r#"[{"LGA_NAME": "ALPINE", "SEVERITY": 1.0, "ACCIDENT_NO": 10.0}]"#;
        assert_eq!(
            parse_severity_json(json).unwrap(),
            vec![record("ALPINE", 1, 10)]
        );
    }

    #[test]
    fn accepts_integral_floats_in_columns() {
        let json = r#"{
            "LGA_NAME": {"0": "ALPINE", "1": "ALPINE"},
            "SEVERITY": {"0": 1.0, "1": 3},
            "ACCIDENT_NO": {"0": 10.0, "1": 2.0}
        }"#;
        assert_eq!(
            parse_severity_json(json).unwrap(),
            vec![record("ALPINE", 1, 10), record("ALPINE", 3, 2)]
        );
    }

    #[test]
    fn rejects_fractional_counts() {
        let rows = r#"[{"LGA_NAME": "ALPINE", "SEVERITY": 1, "ACCIDENT_NO": 1.5}]"#;
        assert!(matches!(
            parse_severity_json(rows).unwrap_err(),
            LoadError::Json(_)
        ));

        let columns = r#"{
            "LGA_NAME": {"0": "ALPINE"},
            "SEVERITY": {"0": 1},
            "ACCIDENT_NO": {"0": 1.5}
        }"#;
        assert!(matches!(
            parse_severity_json(columns).unwrap_err(),
            LoadError::Json(_)
        ));

        let csv = "LGA_NAME,SEVERITY,ACCIDENT_NO\nALPINE,1,1.5\n";
        assert!(matches!(
            parse_severity_csv(csv).unwrap_err(),
            LoadError::Csv(_)
        ));
    }

    #[test]
    fn rejects_mismatched_columns() {
        let json = r#"{
            "LGA_NAME": {"0": "ALPINE", "1": "BALLARAT"},
            "SEVERITY": {"0": 1},
            "ACCIDENT_NO": {"0": 5, "1": 6}
        }"#;
        assert!(matches!(
            parse_severity_json(json).unwrap_err(),
            LoadError::InvalidRecord { .. }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_severity_json("[{\"LGA_NAME\": \"ALPINE\"}]").unwrap_err(),
            LoadError::Json(_)
        ));
        assert!(matches!(
            parse_severity_json("42").unwrap_err(),
            LoadError::InvalidRecord { .. }
        ));
        assert!(matches!(
            parse_severity_json("{").unwrap_err(),
            LoadError::Json(_)
        ));
    }

    #[test]
    fn parses_csv_with_extra_columns() {
        let csv = "ACCIDENT_NO,LGA_NAME,SEVERITY,YEAR\n10,ALPINE,1,2020\n2,ALPINE,3,2021\n";
        assert_eq!(
            parse_severity_csv(csv).unwrap(),
            vec![record("ALPINE", 1, 10), record("ALPINE", 3, 2)]
        );
    }

    #[test]
    fn parses_csv_with_integral_floats() {
        let csv = "LGA_NAME,SEVERITY,ACCIDENT_NO\nALPINE,1.0,10.0\nALPINE,2,3\n";
        assert_eq!(
            parse_severity_csv(csv).unwrap(),
            vec![record("ALPINE", 1, 10), record("ALPINE", 2, 3)]
        );
    }

    #[test]
    fn rejects_bad_csv_values() {
        let csv = "LGA_NAME,SEVERITY,ACCIDENT_NO\nALPINE,one,10\n";
        assert!(matches!(
            parse_severity_csv(csv).unwrap_err(),
            LoadError::Csv(_)
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load_severity(Path::new("accident_severity.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "accident_map_severity_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"LGA_NAME":"ALPINE","SEVERITY":2,"ACCIDENT_NO":4}]"#).unwrap();
        let records = load_severity(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records.unwrap(), vec![record("ALPINE", 2, 4)]);
    }
}
