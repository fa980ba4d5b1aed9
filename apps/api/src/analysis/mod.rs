//! Skill-gap narration — turns ranked match results into career-coach prose.
//!
//! The narrator is a trait behind `Arc<dyn GapNarrator>` in `AppState`, so
//! handlers and tests never depend on the remote service directly.

pub mod prompts;

use async_trait::async_trait;
use serde_json::json;

use crate::analysis::prompts::GAP_ANALYSIS_PROMPT;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::MatchResult;

/// Produces the human-readable matching-skills / skill-gaps narrative.
#[async_trait]
pub trait GapNarrator: Send + Sync {
    async fn narrate(
        &self,
        user_skills: &[String],
        matches: &[MatchResult],
    ) -> Result<String, AppError>;
}

/// Default narrator backed by the Gemini client.
pub struct GeminiNarrator(pub LlmClient);

#[async_trait]
impl GapNarrator for GeminiNarrator {
    async fn narrate(
        &self,
        user_skills: &[String],
        matches: &[MatchResult],
    ) -> Result<String, AppError> {
        let prompt = build_gap_prompt(user_skills, matches);
        self.0
            .call(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Skill gap narration failed: {e}")))
    }
}

/// Renders the career-coach prompt: the top jobs with their skills as a JSON
/// list of dictionaries plus the user's skills as a JSON list.
pub fn build_gap_prompt(user_skills: &[String], matches: &[MatchResult]) -> String {
    let jobs: Vec<_> = matches
        .iter()
        .map(|m| {
            json!({
                "job_title": m.title,
                "skills": m.skills,
            })
        })
        .collect();

    let jobs_json = serde_json::to_string_pretty(&jobs).unwrap_or_else(|_| "[]".to_string());
    let user_json =
        serde_json::to_string_pretty(user_skills).unwrap_or_else(|_| "[]".to_string());

    GAP_ANALYSIS_PROMPT
        .replace("{jobs_json}", &jobs_json)
        .replace("{user_skills_json}", &user_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches() -> Vec<MatchResult> {
        vec![
            MatchResult {
                job_index: 1,
                title: "ML Engineer".to_string(),
                skills: vec!["python".to_string(), "ml".to_string()],
                score: 0.78,
            },
            MatchResult {
                job_index: 0,
                title: "Data Analyst".to_string(),
                skills: vec!["sql".to_string(), "excel".to_string()],
                score: 0.37,
            },
        ]
    }

    #[test]
    fn test_prompt_includes_job_titles_and_skills() {
        let user = vec!["python".to_string(), "sql".to_string()];
        let prompt = build_gap_prompt(&user, &matches());
        assert!(prompt.contains("ML Engineer"));
        assert!(prompt.contains("Data Analyst"));
        assert!(prompt.contains("\"python\""));
        assert!(prompt.contains("Matching Skills"));
        assert!(prompt.contains("Skill Gaps"));
    }

    #[test]
    fn test_prompt_includes_user_skills_as_json_list() {
        let user = vec!["figma".to_string()];
        let prompt = build_gap_prompt(&user, &matches());
        assert!(prompt.contains("\"figma\""));
    }

    #[test]
    fn test_prompt_with_no_matches_is_still_well_formed() {
        let prompt = build_gap_prompt(&[], &[]);
        assert!(prompt.contains("[]"));
        assert!(prompt.contains("career coach"));
    }
}
