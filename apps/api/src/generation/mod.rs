// Freeform content generation: cover letters, resume keyword gaps, interview questions.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
