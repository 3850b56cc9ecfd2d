// Prompt templates for `POST /api/generate`, one per request type.
// Placeholders: `{job_description}`, `{user_resume}`.

pub const COVER_LETTER_PROMPT: &str = "Write a professional cover letter for this Job Description: \
    {job_description}. Using this Resume: {user_resume}";

pub const RESUME_GAP_PROMPT: &str = "Analyze this resume against the JD: {job_description}. \
    Resume: {user_resume}. List 5 missing keywords.";

pub const INTERVIEW_QUESTIONS_PROMPT: &str =
    "Generate 3 interview questions for this JD: {job_description}.";
