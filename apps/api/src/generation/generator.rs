//! Generator — maps a request type to its prompt and relays the model's text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT, INTERVIEW_QUESTIONS_PROMPT, RESUME_GAP_PROMPT,
};
use crate::llm_client::prompts::fill;
use crate::llm_client::TextModel;

/// What the client asked the model to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    CoverLetter,
    ResumeGaps,
    InterviewQuestions,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for GenerationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" | "cover-letter" => Ok(GenerationKind::CoverLetter),
            "resume" => Ok(GenerationKind::ResumeGaps),
            "interview" => Ok(GenerationKind::InterviewQuestions),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

impl GenerationKind {
    fn template(self) -> &'static str {
        match self {
            GenerationKind::CoverLetter => COVER_LETTER_PROMPT,
            GenerationKind::ResumeGaps => RESUME_GAP_PROMPT,
            GenerationKind::InterviewQuestions => INTERVIEW_QUESTIONS_PROMPT,
        }
    }
}

/// Body of `POST /api/generate`. `type` stays a free string so unknown
/// values get the "Invalid request type" reply instead of a 422.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub job_description: String,
    pub user_resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResponse {
    pub result: String,
}

pub fn build_prompt(kind: GenerationKind, request: &GenerationRequest) -> String {
    fill(
        kind.template(),
        &[
            ("job_description", request.job_description.as_str()),
            ("user_resume", request.user_resume.as_str()),
        ],
    )
}

/// One model call, text passed through untouched.
pub async fn generate_content(
    model: &dyn TextModel,
    kind: GenerationKind,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let prompt = build_prompt(kind, request);
    Ok(model.generate(&prompt).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: &str) -> GenerationRequest {
        GenerationRequest {
            kind: kind.to_string(),
            job_description: "Backend engineer, Rust and Postgres".to_string(),
            user_resume: "Five years of Go and Rust".to_string(),
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("cover".parse::<GenerationKind>(), Ok(GenerationKind::CoverLetter));
        assert_eq!("cover-letter".parse::<GenerationKind>(), Ok(GenerationKind::CoverLetter));
        assert_eq!("resume".parse::<GenerationKind>(), Ok(GenerationKind::ResumeGaps));
        assert_eq!("interview".parse::<GenerationKind>(), Ok(GenerationKind::InterviewQuestions));
        assert_eq!(
            "Cover".parse::<GenerationKind>(),
            Err(UnknownKind("Cover".to_string()))
        );
    }

    #[test]
    fn test_cover_prompt_includes_jd_and_resume() {
        let prompt = build_prompt(GenerationKind::CoverLetter, &request("cover"));
        assert_eq!(
            prompt,
            "Write a professional cover letter for this Job Description: \
             Backend engineer, Rust and Postgres. Using this Resume: Five years of Go and Rust"
        );
    }

    #[test]
    fn test_resume_prompt_asks_for_five_keywords() {
        let prompt = build_prompt(GenerationKind::ResumeGaps, &request("resume"));
        assert!(prompt.contains("Resume: Five years of Go and Rust"));
        assert!(prompt.ends_with("List 5 missing keywords."));
    }

    #[test]
    fn test_interview_prompt_ignores_resume() {
        let prompt = build_prompt(GenerationKind::InterviewQuestions, &request("interview"));
        assert_eq!(
            prompt,
            "Generate 3 interview questions for this JD: Backend engineer, Rust and Postgres."
        );
    }

    #[test]
    fn test_request_deserializes_type_field() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"type": "cover", "job_description": "jd", "user_resume": "cv"}"#,
        )
        .unwrap();
        assert_eq!(req.kind, "cover");
    }
}
