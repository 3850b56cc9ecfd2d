//! Axum route handler for interview prep.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::errors::RequestError;
use crate::interview::prep::{
    fallback_questions, generate_questions, InterviewQuestionSet, InterviewRequest,
};
use crate::state::AppState;

/// POST /api/interview-prep
///
/// Returns `{questions: [...]}` from the model, or the static fallback set
/// when the job description is blank, the call fails, or the reply is unusable.
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    payload: Result<Json<InterviewRequest>, JsonRejection>,
) -> Result<Json<InterviewQuestionSet>, RequestError> {
    let Json(request) = payload?;

    if request.job_description.trim().is_empty() {
        info!("Empty job description; serving fallback interview questions");
        return Ok(Json(fallback_questions()));
    }

    let questions = match generate_questions(state.model.as_ref(), &request.job_description).await
    {
        Ok(Some(set)) => set,
        Ok(None) => fallback_questions(),
        Err(e) => {
            warn!("Interview prep failed, serving fallback: {e}");
            fallback_questions()
        }
    };

    Ok(Json(questions))
}
