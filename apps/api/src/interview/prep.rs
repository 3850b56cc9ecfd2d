//! Interview prep — model-derived question set with a static fallback.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompts::INTERVIEW_PREP_PROMPT_TEMPLATE;
use crate::llm_client::json::parse_json;
use crate::llm_client::prompts::{fill, JSON_ONLY_INSTRUCTION};
use crate::llm_client::TextModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    /// "Behavioral" | "Technical" | "Situational"; kept as the model wrote it.
    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: String,
    #[serde(default)]
    pub suggested_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub job_description: String,
}

/// Models sometimes drop the wrapper object and return the bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionsReply {
    Wrapped(InterviewQuestionSet),
    Bare(Vec<InterviewQuestion>),
}

fn default_question_type() -> String {
    "General".to_string()
}

/// (question, type, suggested_answer)
const FALLBACK_QUESTIONS: [(&str, &str, &str); 5] = [
    (
        "Tell me about yourself and why you are interested in this role.",
        "Behavioral",
        "Give a two-minute summary of your background, highlight the experience most relevant \
         to the role, and connect it to what excites you about the company.",
    ),
    (
        "Describe a challenging project you worked on and how you handled it.",
        "Behavioral",
        "Use the STAR method: set the situation, explain your task, walk through the actions \
         you took, and finish with a measurable result.",
    ),
    (
        "How do you prioritize your work when you have multiple deadlines?",
        "Situational",
        "Explain how you assess urgency and impact, communicate with stakeholders, and adjust \
         the plan, using a concrete example.",
    ),
    (
        "What technical skills make you a strong fit for this position?",
        "Technical",
        "Map two or three of your strongest skills directly to requirements in the job \
         description and back each one with a project or achievement.",
    ),
    (
        "Where do you see yourself in five years?",
        "Behavioral",
        "Show ambition that aligns with the role's growth path and emphasize your commitment \
         to learning and contributing to the team.",
    ),
];

/// The fixed five-question set returned whenever the model output is unusable.
pub fn fallback_questions() -> InterviewQuestionSet {
    InterviewQuestionSet {
        questions: FALLBACK_QUESTIONS
            .iter()
            .map(|(question, question_type, answer)| InterviewQuestion {
                question: question.to_string(),
                question_type: question_type.to_string(),
                suggested_answer: answer.to_string(),
            })
            .collect(),
    }
}

pub fn build_interview_prompt(job_description: &str) -> String {
    let prompt = fill(
        INTERVIEW_PREP_PROMPT_TEMPLATE,
        &[("job_description", job_description)],
    );
    format!("{prompt}\n{JSON_ONLY_INSTRUCTION}")
}

/// Decodes a reply into a non-empty question set. `None` means "use the fallback".
pub fn parse_questions(reply: &str) -> Option<InterviewQuestionSet> {
    let questions = match parse_json::<QuestionsReply>(reply) {
        Ok(QuestionsReply::Wrapped(set)) => set.questions,
        Ok(QuestionsReply::Bare(list)) => list,
        Err(e) => {
            warn!("Interview questions reply was not valid JSON: {e}");
            return None;
        }
    };

    let questions: Vec<InterviewQuestion> = questions
        .into_iter()
        .filter(|q| !q.question.trim().is_empty())
        .collect();

    if questions.is_empty() {
        warn!("Interview questions reply contained no questions");
        None
    } else {
        Some(InterviewQuestionSet { questions })
    }
}

/// Asks the model for a question set. Errors only when the call itself fails.
pub async fn generate_questions(
    model: &dyn TextModel,
    job_description: &str,
) -> Result<Option<InterviewQuestionSet>, AppError> {
    let prompt = build_interview_prompt(job_description);
    let reply = model.generate(&prompt).await?;
    let parsed = parse_questions(&reply);
    if let Some(set) = &parsed {
        info!("Generated {} interview questions", set.questions.len());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_has_five_complete_questions() {
        let set = fallback_questions();
        assert_eq!(set.questions.len(), 5);
        for q in &set.questions {
            assert!(!q.question.is_empty());
            assert!(!q.suggested_answer.is_empty());
            assert!(["Behavioral", "Technical", "Situational"].contains(&q.question_type.as_str()));
        }
    }

    #[test]
    fn test_fallback_serializes_type_field() {
        let value = serde_json::to_value(fallback_questions()).unwrap();
        assert_eq!(value["questions"][0]["type"], "Behavioral");
        assert!(value["questions"][0].get("question_type").is_none());
    }

    #[test]
    fn test_parse_wrapped_questions() {
        let reply = json!({
            "questions": [
                {"question": "What is ownership in Rust?", "type": "Technical", "suggested_answer": "Each value has one owner."},
                {"question": "Describe a conflict with a teammate.", "type": "Behavioral", "suggested_answer": "STAR."}
            ]
        })
        .to_string();
        let set = parse_questions(&reply).unwrap();
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.questions[0].question_type, "Technical");
    }

    #[test]
    fn test_parse_fenced_bare_list() {
        let reply = "```json\n[{\"question\": \"Why us?\", \"type\": \"Behavioral\", \"suggested_answer\": \"Mission.\"}]\n```";
        let set = parse_questions(reply).unwrap();
        assert_eq!(set.questions[0].question, "Why us?");
    }

    #[test]
    fn test_missing_type_defaults_to_general() {
        let set = parse_questions(r#"{"questions": [{"question": "Why Rust?"}]}"#).unwrap();
        assert_eq!(set.questions[0].question_type, "General");
        assert_eq!(set.questions[0].suggested_answer, "");
    }

    #[test]
    fn test_unparsable_reply_yields_none() {
        assert!(parse_questions("1. Tell me about yourself\n2. Why this company?").is_none());
    }

    #[test]
    fn test_empty_question_list_yields_none() {
        assert!(parse_questions(r#"{"questions": []}"#).is_none());
        assert!(parse_questions(r#"{"questions": [{"question": "  "}]}"#).is_none());
    }

    #[test]
    fn test_prompt_contains_job_description() {
        let prompt = build_interview_prompt("Staff SRE, on-call, Kubernetes");
        assert!(prompt.contains("Staff SRE, on-call, Kubernetes"));
        assert!(prompt.contains("exactly 5 interview questions"));
    }
}
