// Content safety: a one-word LLM verdict gating uploaded text.

pub mod classifier;
pub mod handlers;
pub mod prompts;
