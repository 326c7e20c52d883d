// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Closing instruction for prompts whose answer is parsed as JSON.
/// Fenced output is rejected downstream, so the model is told not to produce it.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Respond with ONLY valid JSON, no markdown code blocks or extra text.";
