//! Axum route handler for the resume matcher.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::analysis::matcher::{analyze_match, AnalysisResult};
use crate::analysis::pdf::{has_pdf_extension, ResumeTextExtractor};
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Fields pulled out of the multipart upload.
#[derive(Debug)]
struct ResumeUpload {
    filename: String,
    bytes: Bytes,
    job_description: String,
}

/// POST /api/analyze-resume
///
/// Multipart `resume` (PDF) + `job_description`. Every failure is reported as
/// a 200 `{error}` body; an undecodable model reply comes back as `{raw_response}`.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<AnalysisResult> {
    let result = match multipart {
        Ok(multipart) => analyze_upload(&state, multipart).await,
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    };

    Json(result.unwrap_or_else(|e| {
        warn!("Resume analysis failed: {e}");
        AnalysisResult::error(e.client_message())
    }))
}

async fn analyze_upload(
    state: &AppState,
    multipart: Multipart,
) -> Result<AnalysisResult, AppError> {
    let upload = read_upload(multipart).await?;

    info!(
        "Analyzing resume '{}' ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    let resume_text = extract_resume_text(state.resume_reader.clone(), upload.bytes).await?;

    analyze_match(state.model.as_ref(), &resume_text, &upload.job_description).await
}

async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                resume = Some((filename, bytes));
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let (filename, bytes) = resume
        .ok_or_else(|| AppError::Validation("Missing 'resume' file upload".to_string()))?;

    if !has_pdf_extension(&filename) {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded resume is empty".to_string()));
    }

    Ok(ResumeUpload {
        filename,
        bytes,
        job_description,
    })
}

/// Runs PDF extraction on the blocking pool; a panicking parser becomes an error.
async fn extract_resume_text(
    reader: Arc<dyn ResumeTextExtractor>,
    bytes: Bytes,
) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || reader.extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))??;
    Ok(text)
}

fn multipart_error(e: MultipartError) -> AppError {
    AppError::Validation(e.body_text())
}
