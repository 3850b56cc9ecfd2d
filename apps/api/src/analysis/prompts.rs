// LLM prompt constants for the resume matcher.

/// Match prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert technical recruiter and applicant-tracking-system (ATS) analyst.
Compare the candidate's resume with the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 72,
  "missing_keywords": ["Kubernetes", "GraphQL"],
  "advice": "Two or three sentences of concrete advice for tailoring the resume."
}

Rules:
- match_score is an integer from 0 to 100 describing how well the resume fits the role.
- missing_keywords lists skills, tools or qualifications the job asks for that the resume does not show.
- advice is addressed to the candidate and must reference the job description.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}
"#;
