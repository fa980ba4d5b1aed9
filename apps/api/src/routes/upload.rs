//! Résumé upload flow: multipart PDF in, extraction + matching + narration,
//! HTML page with download links out.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::normalize::normalize;
use crate::resume::{extract_pdf_text, parse_resume};
use crate::state::AppState;
use crate::storage::{analysis_csv, resume_csv};

const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><title>Resume Skill Gap Analysis</title></head>
<body>
  <h1>Upload your resume</h1>
  <form method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept="application/pdf" required>
    <button type="submit">Analyze</button>
  </form>
</body>
</html>"#;

/// GET /
pub async fn show_upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /
///
/// Saves the upload, extracts text, asks the LLM for the typed résumé
/// record, persists it to CSV, runs the skill matcher, and narrates the
/// gaps for the top matches. An upload with no recognizable skills still
/// renders a page; it just skips ranking and narration.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .map(str::to_string)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| AppError::Validation("No selected file".to_string()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file part in request".to_string()))?;
    let filename = sanitize_filename(&filename)?;
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(&filename)
        .to_string();

    // Unique on-disk name so concurrent uploads of "resume.pdf" never collide
    let stored_name = format!("{}_{filename}", Uuid::new_v4());
    let pdf_path = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&pdf_path, &data)
        .await
        .map_err(|e| AppError::Storage(format!("Failed to save upload: {e}")))?;
    info!(file = %filename, bytes = data.len(), "resume uploaded");

    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&pdf_path))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    let profile = parse_resume(&text, &state.llm).await?;

    let csv_name = format!("extracted_data_{stem}.csv");
    let csv_path = state.config.data_dir.join(&csv_name);
    resume_csv::append_profile(&csv_path, &profile)
        .map_err(|e| AppError::Storage(e.to_string()))?;

    let raw_skills = profile.technical_skills_raw()?;
    let user_skills = normalize(&raw_skills);

    if user_skills.is_empty() {
        return Ok(Html(render_no_skills_page(&csv_name)));
    }

    let matches = state
        .matcher
        .top_matches(&raw_skills, state.config.top_n)?;
    let narrative = state.narrator.narrate(&user_skills, &matches).await?;

    let analysis_name = format!("skill_gap_analysis_{stem}.csv");
    let analysis_path = state.config.data_dir.join(&analysis_name);
    analysis_csv::write_analysis(&analysis_path, &narrative)
        .map_err(|e| AppError::Storage(e.to_string()))?;

    Ok(Html(render_success_page(
        &csv_name,
        &analysis_name,
        &narrative,
    )))
}

/// Strips any path components from a client-supplied filename and insists on
/// a PDF extension.
fn sanitize_filename(raw: &str) -> Result<String, AppError> {
    let name = std::path::Path::new(raw)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .ok_or_else(|| AppError::Validation("Invalid file name".to_string()))?;

    if !name.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF resumes are supported".to_string(),
        ));
    }

    Ok(name.to_string())
}

fn render_success_page(csv_name: &str, analysis_name: &str, narrative: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Skill Gap Analysis</title></head>
<body>
  <h1>Analysis complete</h1>
  <p><a href="/data/{csv}">Download extracted resume data</a></p>
  <p><a href="/data/{analysis}">Download skill gap analysis</a></p>
  <h2>Skill Gap Analysis</h2>
  <pre>{narrative}</pre>
  <p><a href="/">Upload another resume</a></p>
</body>
</html>"#,
        csv = escape_html(csv_name),
        analysis = escape_html(analysis_name),
        narrative = escape_html(narrative),
    )
}

fn render_no_skills_page(csv_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Skill Gap Analysis</title></head>
<body>
  <h1>No skills detected</h1>
  <p>No technical skills were found in the resume, so jobs cannot be ranked.</p>
  <p><a href="/data/{csv}">Download extracted resume data</a></p>
  <p><a href="/">Upload another resume</a></p>
</body>
</html>"#,
        csv = escape_html(csv_name),
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
