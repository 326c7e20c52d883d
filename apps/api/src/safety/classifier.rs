//! Content Safety Classifier.
//!
//! Fails OPEN on the model's answer: anything that does not start with
//! "unsafe" (case-insensitive) is safe, including empty or rambling output.
//! Fails CLOSED on the call: if the model can't be reached there is no
//! verdict, and the error goes back to the caller.

use serde::Serialize;

use crate::llm_client::{LlmError, ResponseFormat, TextGenerator};
use crate::safety::prompts::build_classify_prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Unsafe,
}

impl Verdict {
    /// Lower-cases the raw response and checks for the `unsafe` prefix. No trimming.
    pub fn from_response(response: &str) -> Self {
        if response.to_lowercase().starts_with("unsafe") {
            Verdict::Unsafe
        } else {
            Verdict::Safe
        }
    }

    pub fn is_unsafe(self) -> bool {
        self == Verdict::Unsafe
    }
}

/// Returns `true` when the content is unsafe.
pub async fn classify(generator: &dyn TextGenerator, content: &str) -> Result<bool, LlmError> {
    let prompt = build_classify_prompt(content);
    let response = generator.generate(&prompt, ResponseFormat::Text).await?;
    Ok(Verdict::from_response(&response).is_unsafe())
}
