//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::pipeline::{analyze, AnalysisReport, JobInput};
use crate::errors::AppError;
use crate::extraction::{Document, DocumentKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    /// Job title or one-line description, scored like a title.
    #[serde(default, alias = "job_title")]
    pub job_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (file, required) plus either `job_title` (text)
/// or `job_description` (file). A job description document takes precedence
/// over a title when both are sent.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume = None;
    let mut job_title = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => resume = read_document(field, "resume").await?,
            "job_description" => job_description = read_document(field, "job description").await?,
            "job_title" => job_title = Some(field.text().await.map_err(malformed)?),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    let resume = resume.ok_or_else(|| {
        AppError::Validation("Please upload a resume before analyzing.".to_string())
    })?;
    let job = job_input(job_title, job_description.map(JobInput::Document))?;

    let report = run_analysis(&state, resume, job).await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/text
///
/// JSON variant for callers that already hold plain text:
/// `{resume_text, job_text}`, or `job_description` for a full description.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let resume = Document::plain_text(request.resume_text);
    let job = job_input(
        request.job_text,
        request
            .job_description
            .filter(|d| !d.trim().is_empty())
            .map(|d| JobInput::Document(Document::plain_text(d))),
    )?;

    let report = run_analysis(&state, resume, job).await?;
    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Extraction and parsing block, so the pipeline runs on the blocking pool.
async fn run_analysis(
    state: &AppState,
    resume: Document,
    job: JobInput,
) -> Result<AnalysisReport, AppError> {
    let top_n = state.config.keyword_top_n;
    let scorer = Arc::clone(&state.scorer);

    tokio::task::spawn_blocking(move || analyze(&resume, &job, top_n, scorer.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?
}

fn job_input(title: Option<String>, document: Option<JobInput>) -> Result<JobInput, AppError> {
    if let Some(document) = document {
        return Ok(document);
    }
    match title {
        Some(title) if !title.trim().is_empty() => Ok(JobInput::Title(title)),
        _ => Err(AppError::Validation(
            "Please enter a job title before analyzing.".to_string(),
        )),
    }
}

/// Reads an uploaded file field. A file input left empty by the browser
/// (no filename, no bytes) counts as not uploaded.
async fn read_document(
    field: Field<'_>,
    label: &'static str,
) -> Result<Option<Document>, AppError> {
    let content_type = field.content_type().map(String::from);
    let file_name = field.file_name().map(String::from);
    let data = field.bytes().await.map_err(malformed)?;

    if data.is_empty() && file_name.as_deref().map_or(true, str::is_empty) {
        return Ok(None);
    }

    let kind = DocumentKind::detect(content_type.as_deref(), file_name.as_deref())
        .map_err(|e| AppError::extraction(label, e))?;

    tracing::debug!(
        field = label,
        ?kind,
        file_name = file_name.as_deref().unwrap_or(""),
        bytes = data.len(),
        "received upload"
    );

    let document = Document::new(kind, data);
    Ok(Some(match file_name {
        Some(name) => document.with_filename(name),
        None => document,
    }))
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed form data: {e}"))
}
