//! Axum route handler for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::errors::RequestError;
use crate::generation::generator::{
    generate_content, GenerationKind, GenerationRequest, GenerationResponse, UnknownKind,
};
use crate::state::AppState;

const INVALID_TYPE_RESULT: &str = "Invalid request type";

/// POST /api/generate
///
/// Builds the prompt for `type` and returns the model text as `{result}`.
/// Model failures come back as `{result: "Error: ..."}` with status 200.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, RequestError> {
    let Json(request) = payload?;
    info!("Received generation request: {}", request.kind);

    let kind: GenerationKind = match request.kind.parse() {
        Ok(kind) => kind,
        Err(UnknownKind(other)) => {
            warn!("Unknown generation type '{other}'");
            return Ok(Json(GenerationResponse {
                result: INVALID_TYPE_RESULT.to_string(),
            }))
        }
    };

    let result = match generate_content(state.model.as_ref(), kind, &request).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Generation failed for {:?}: {e}", kind);
            format!("Error: {}", e.client_message())
        }
    };

    Ok(Json(GenerationResponse { result }))
}
