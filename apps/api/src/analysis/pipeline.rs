//! One analysis: extract → keywords (×2) → score → recommendation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract, Document};
use crate::keywords::{extract_keywords, extract_title_keywords, KeywordSet};
use crate::scoring::{build_recommendation, MatchResult, MatchScorer};

/// The job side of an analysis: a short title typed by the user, or a full
/// job description document.
#[derive(Debug, Clone)]
pub enum JobInput {
    Title(String),
    Document(Document),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSource {
    Title,
    Document,
}

impl JobInput {
    fn source(&self) -> JobSource {
        match self {
            JobInput::Title(_) => JobSource::Title,
            JobInput::Document(_) => JobSource::Document,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub job_source: JobSource,
    pub resume_keywords: KeywordSet,
    pub job_keywords: KeywordSet,
    pub match_result: MatchResult,
    /// `match_result.score` rounded to two decimals for display.
    pub score_percent: f64,
    pub recommendation: String,
    pub scorer_backend: String,
}

/// Runs the full pipeline. Blocking: call from `spawn_blocking` in async code.
///
/// Fails before any scoring if either document cannot be read or yields no text.
pub fn analyze(
    resume: &Document,
    job: &JobInput,
    top_n: usize,
    scorer: &dyn MatchScorer,
) -> Result<AnalysisReport, AppError> {
    let resume_text = extract_required(resume, "resume")?;
    let resume_keywords = extract_keywords(&resume_text, top_n);

    let job_keywords = match job {
        JobInput::Title(title) => {
            if title.trim().is_empty() {
                return Err(AppError::Validation(
                    "Please enter a job title before analyzing.".to_string(),
                ));
            }
            extract_title_keywords(title, top_n)
        }
        JobInput::Document(doc) => {
            let job_text = extract_required(doc, "job description")?;
            extract_keywords(&job_text, top_n)
        }
    };

    let match_result = scorer.score(&resume_keywords, &job_keywords);
    let recommendation = build_recommendation(&match_result);
    let score_percent = (match_result.score * 100.0).round() / 100.0;

    let report = AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        job_source: job.source(),
        resume_keywords,
        job_keywords,
        match_result,
        score_percent,
        recommendation,
        scorer_backend: scorer.name().to_string(),
    };

    tracing::info!(
        analysis_id = %report.analysis_id,
        job_source = ?report.job_source,
        resume_keywords = report.resume_keywords.len(),
        job_keywords = report.job_keywords.len(),
        score = report.score_percent,
        "analysis complete"
    );
    Ok(report)
}

fn extract_required(document: &Document, label: &'static str) -> Result<String, AppError> {
    let text = extract(document).map_err(|e| AppError::extraction(label, e))?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput(label));
    }
    Ok(text)
}
