//! Analysis service: truncate, prompt, call the upstream generator once,
//! strip fences, parse and validate the Analysis Result.

pub mod handlers;
pub mod prompts;
pub mod schema;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, GenerationRequest, TextGenerator};
use crate::models::analysis::AnalysisResult;

/// Upper bound on resume characters forwarded upstream. Longer input is cut silently.
pub const MAX_RESUME_CHARS: usize = 15_000;

/// Low temperature keeps scoring and rewrite output stable across calls.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Returns at most the first `MAX_RESUME_CHARS` characters of `text`.
/// Cuts on a char boundary; never splits a code point.
pub fn truncate_resume(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the single upstream request for a resume.
pub fn build_request(resume_text: &str) -> GenerationRequest {
    GenerationRequest {
        system_instruction: prompts::ANALYSIS_SYSTEM.to_string(),
        user_prompt: prompts::build_user_prompt(truncate_resume(resume_text)),
        temperature: ANALYSIS_TEMPERATURE,
        response_schema: schema::analysis_response_schema(),
    }
}

/// Runs one analysis against `generator`.
///
/// Returns the upstream JSON document untouched once it validates as an
/// `AnalysisResult`. Every failure maps to `AppError::Upstream`.
pub async fn run_analysis(
    generator: &dyn TextGenerator,
    resume_text: &str,
) -> Result<Value, AppError> {
    let request = build_request(resume_text);
    info!(
        "Analyzing resume: {} chars (limit {MAX_RESUME_CHARS})",
        truncate_resume(resume_text).chars().count()
    );

    let raw = generator
        .generate(&request)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let text = strip_json_fences(&raw);
    if text.is_empty() {
        return Err(AppError::Upstream("Empty response from Gemini".to_string()));
    }

    let document: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Upstream(format!("Gemini returned invalid JSON: {e}")))?;

    AnalysisResult::deserialize(&document).map_err(|e| {
        AppError::Upstream(format!("Gemini response does not match the analysis schema: {e}"))
    })?;

    Ok(document)
}
