//! Extracted-résumé CSV writer. One row per processed upload, appended to a
//! per-résumé file; the header is written only when the file is created.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::resume::ResumeProfile;

const HEADERS: [&str; 4] = [
    "Employment details",
    "Technical skills",
    "Soft skills",
    "Qualification",
];

/// Appends one extracted record. Creates the file (with header) on first use.
pub fn append_profile(path: &Path, profile: &ResumeProfile) -> Result<()> {
    let file_exists = path.exists();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    if !file_exists {
        writer.write_record(HEADERS)?;
    }

    let employment = serde_json::to_string(&profile.employment_details)
        .context("failed to serialize employment details")?;
    let technical = skills_cell(&profile.technical_skills);
    let soft = skills_cell(&profile.soft_skills);
    writer.write_record([
        employment.as_str(),
        technical.as_str(),
        soft.as_str(),
        profile.qualification.as_deref().unwrap_or(""),
    ])?;
    writer.flush()?;

    Ok(())
}

/// Renders a loose skills value for a CSV cell: lists joined with ", ",
/// strings as-is, anything else empty.
fn skills_cell(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::EmploymentEntry;
    use serde_json::json;

    fn profile() -> ResumeProfile {
        ResumeProfile {
            employment_details: vec![EmploymentEntry {
                title: "Software Engineer".to_string(),
                company: "Example Corp".to_string(),
            }],
            technical_skills: json!(["Python", "Java"]),
            soft_skills: json!(["Communication"]),
            qualification: Some("Bachelor's in Computer Science".to_string()),
        }
    }

    #[test]
    fn test_header_is_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted.csv");

        append_profile(&path, &profile()).unwrap();
        append_profile(&path, &profile()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header_count = contents
            .lines()
            .filter(|l| l.starts_with("Employment details"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_row_round_trips_through_csv_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted.csv");
        append_profile(&path, &profile()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert!(record[0].contains("Example Corp"));
        assert_eq!(&record[1], "Python, Java");
        assert_eq!(&record[2], "Communication");
        assert_eq!(&record[3], "Bachelor's in Computer Science");
    }

    #[test]
    fn test_string_shaped_and_missing_fields() {
        assert_eq!(skills_cell(&json!("sql, excel")), "sql, excel");
        assert_eq!(skills_cell(&Value::Null), "");
        assert_eq!(skills_cell(&json!(42)), "");
    }
}
