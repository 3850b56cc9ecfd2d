// LLM prompt constants for interview prep.

/// Interview prep prompt template. Replace `{job_description}` before sending.
pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = r#"You are an experienced hiring manager preparing a candidate for an interview.
Write exactly 5 interview questions for the job description below, mixing behavioral,
technical and situational questions, each with a concise suggested answer the candidate
could adapt.

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "question": "Tell me about a time you debugged a production outage.",
      "type": "Behavioral",
      "suggested_answer": "Use the STAR method: describe the outage, your role, the steps you took and the measurable result."
    }
  ]
}

"type" must be one of: "Behavioral", "Technical", "Situational".

JOB DESCRIPTION:
{job_description}
"#;
