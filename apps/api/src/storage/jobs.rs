//! Job-corpus loader.
//!
//! The postings CSV carries `Job Title` and `Top Skills` columns. The skills
//! cell comes in two historical shapes: a plain comma-delimited string, or a
//! Python-style list literal (`['sql', 'excel']`) left behind by the pandas
//! export that produced the dataset. A malformed literal degrades to an
//! empty skill list rather than failing the whole load.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::matching::normalize::{normalize, RawSkills};
use crate::matching::JobRecord;

#[derive(Debug, Deserialize)]
struct JobRow {
    #[serde(rename = "Job Title")]
    title: String,
    #[serde(rename = "Top Skills", default)]
    top_skills: String,
}

/// Loads the ordered, immutable job corpus. Called once at startup.
pub fn load_jobs_corpus(path: &Path) -> Result<Vec<JobRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open jobs corpus at {}", path.display()))?;

    let mut corpus = Vec::new();
    for row in reader.deserialize::<JobRow>() {
        let row = row.context("malformed row in jobs corpus")?;
        corpus.push(JobRecord {
            title: row.title,
            skills: parse_skills_cell(&row.top_skills),
        });
    }

    info!(jobs = corpus.len(), path = %path.display(), "job corpus loaded");
    Ok(corpus)
}

/// Parses one skills cell, accepting either shape.
pub fn parse_skills_cell(cell: &str) -> Vec<String> {
    let trimmed = cell.trim();
    if trimmed.starts_with('[') {
        parse_list_literal(trimmed).unwrap_or_default()
    } else {
        normalize(&RawSkills::from(trimmed))
    }
}

/// Parses a Python-style list literal of quoted strings. Returns `None` on
/// any structural surprise, mirroring the original's safe-eval fallback.
fn parse_list_literal(literal: &str) -> Option<Vec<String>> {
    let inner = literal.strip_prefix('[')?.strip_suffix(']')?;
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        // Skip separators between items
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',') {
            chars.next();
        }
        let quote = match chars.next() {
            None => break,
            Some(c @ ('\'' | '"')) => c,
            Some(_) => return None,
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                None => return None, // unterminated string
                Some(c) if c == quote => break,
                Some(c) => item.push(c),
            }
        }
        let item = item.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }

    Some(items)
}
