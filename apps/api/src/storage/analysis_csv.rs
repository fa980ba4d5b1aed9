//! Skill-gap analysis CSV writer: a single-column file with one row per
//! narrative line, under a `Skill Gap Analysis` header.

use std::path::Path;

use anyhow::{Context, Result};

/// Writes (or overwrites) the analysis file for one run.
pub fn write_analysis(path: &Path, narrative: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["Skill Gap Analysis"])?;
    for line in narrative.trim().lines() {
        writer.write_record([line])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_narrative_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.csv");
        write_analysis(&path, "Job 1: ML Engineer\nMatching Skills: python\nSkill Gaps: ml\n")
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "Job 1: ML Engineer");
        assert_eq!(&rows[2][0], "Skill Gaps: ml");
    }

    #[test]
    fn test_rerun_overwrites_previous_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.csv");
        write_analysis(&path, "first run").unwrap();
        write_analysis(&path, "second run").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("second run"));
        assert!(!contents.contains("first run"));
    }
}
