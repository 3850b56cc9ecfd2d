//! Resume matcher — asks the model for a match report and decodes it leniently.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::prompts::MATCH_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::json::parse_json;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::llm_client::TextModel;

/// Structured match report decoded from the model's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(deserialize_with = "deserialize_score")]
    pub match_score: u8, // 0 – 100
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub advice: String,
}

/// Body of `POST /api/analyze-resume`. Exactly one shape is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Match(MatchReport),
    Raw { raw_response: String },
    Error { error: String },
}

impl AnalysisResult {
    pub fn error(message: impl Into<String>) -> Self {
        AnalysisResult::Error {
            error: message.into(),
        }
    }
}

pub fn build_match_prompt(resume_text: &str, job_description: &str) -> String {
    let prompt = fill(
        MATCH_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    );
    format!("{prompt}\n{JSON_ONLY_INSTRUCTION}")
}

/// Runs the match prompt. Only the model call itself can fail; an
/// undecodable reply comes back as `AnalysisResult::Raw`.
pub async fn analyze_match(
    model: &dyn TextModel,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_match_prompt(resume_text, job_description);
    let reply = model.generate(&prompt).await?;
    Ok(interpret_reply(reply))
}

/// Decodes the model reply into a `MatchReport`, or passes the text through.
pub fn interpret_reply(reply: String) -> AnalysisResult {
    match parse_json::<MatchReport>(&reply) {
        Ok(mut report) => {
            report.missing_keywords.retain(|k| !k.trim().is_empty());
            info!(
                "Resume match decoded: score={}, missing_keywords={}",
                report.match_score,
                report.missing_keywords.len()
            );
            AnalysisResult::Match(report)
        }
        Err(e) => {
            warn!("Model reply was not a match report ({e}); returning raw text");
            AnalysisResult::Raw {
                raw_response: reply,
            }
        }
    }
}

/// Accepts integers, floats and numeric strings ("85", "85%"), rounded and clamped to 0–100.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };

    raw.filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid match_score: {value}")))
}
