//! Axum route handlers for the Analysis API.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::analysis::run_analysis;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

/// Parses the raw body. Anything that is not a JSON object with a string
/// `resumeText` is a validation error, including a body that is not JSON at all.
/// Arrays and bare strings are rejected even when they hold text.
fn parse_request(body: &[u8]) -> Result<AnalyzeRequest, AppError> {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    value
        .as_object()
        .and_then(|fields| fields.get("resumeText"))
        .and_then(Value::as_str)
        .map(|text| AnalyzeRequest {
            resume_text: text.to_string(),
        })
        .ok_or_else(|| AppError::Validation("resumeText is required as string".to_string()))
}

/// POST /api/analyze
///
/// Audits, scores and rewrites the submitted resume in one upstream call.
/// Check order: credential, then input, then the upstream call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let generator = state.generator.as_ref().ok_or_else(|| {
        AppError::Configuration("Server misconfigured: GEMINI_API_KEY is not set".to_string())
    })?;

    let request = parse_request(&body)?;

    let result = run_analysis(generator.as_ref(), &request.resume_text).await?;
    Ok(Json(result))
}

/// Any method other than POST on /api/analyze.
pub async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}
