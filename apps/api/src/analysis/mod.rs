// Resume / job-description matcher.
// PDF upload → text extraction → LLM match report → best-effort JSON cleanup.

pub mod handlers;
pub mod matcher;
pub mod pdf;
pub mod prompts;
