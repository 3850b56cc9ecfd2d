// Structured interview prep: five questions with suggested answers,
// falling back to a fixed set when the model output is unusable.

pub mod handlers;
pub mod prep;
pub mod prompts;
