//! Résumé ingestion: PDF text extraction plus LLM-backed structured parsing.

pub mod prompts;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::normalize::RawSkills;
use crate::resume::prompts::RESUME_PARSE_PROMPT;

/// One employment entry as extracted from the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
}

/// Typed résumé record returned by the extraction service.
///
/// The skills fields stay as raw JSON values: the model is asked for lists
/// but occasionally returns a comma-joined string, and that looseness is
/// resolved by the normalizer, not here. Missing fields degrade to empty,
/// never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub employment_details: Vec<EmploymentEntry>,
    #[serde(default)]
    pub technical_skills: Value,
    #[serde(default)]
    pub soft_skills: Value,
    #[serde(default)]
    pub qualification: Option<String>,
}

impl ResumeProfile {
    /// The technical-skills field in boundary form, ready for the matcher.
    pub fn technical_skills_raw(&self) -> Result<RawSkills, AppError> {
        RawSkills::from_json(&self.technical_skills).map_err(AppError::from)
    }
}

/// Extracts plain text from a PDF on disk. Synchronous; callers inside the
/// async runtime must wrap this in `spawn_blocking`.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path)
        .with_context(|| format!("failed to extract text from {}", path.display()))?;
    Ok(text.trim().to_string())
}

/// Sends résumé text to the extraction service and parses the typed record.
pub async fn parse_resume(resume_text: &str, llm: &LlmClient) -> Result<ResumeProfile, AppError> {
    let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", resume_text);
    let profile: ResumeProfile = llm
        .call_json(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to parse resume: {e}")))?;

    info!(
        employment = profile.employment_details.len(),
        "resume parsed"
    );
    Ok(profile)
}
