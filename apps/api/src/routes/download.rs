//! CSV download endpoint for extracted data and analysis files.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /data/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    validate_filename(&filename)?;

    let path = state.config.data_dir.join(&filename);
    let contents = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("File '{filename}' not found")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        contents,
    )
        .into_response())
}

/// Downloads are restricted to plain CSV names inside the data directory.
fn validate_filename(filename: &str) -> Result<(), AppError> {
    let traversal = filename.contains('/') || filename.contains('\\') || filename.contains("..");
    if traversal || filename.is_empty() || !filename.ends_with(".csv") {
        return Err(AppError::Validation(format!(
            "Invalid download name '{filename}'"
        )));
    }
    Ok(())
}
