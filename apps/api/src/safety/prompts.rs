// All LLM prompt constants for the safety module.

/// Classification prompt template. Replace `{content}` before sending.
pub const CLASSIFY_PROMPT_TEMPLATE: &str = r#"You are a content safety classifier. Analyze the following file content and determine if it contains harmful, inappropriate, or spammy content.

Respond with ONLY one word:
- "unsafe" if the content is harmful, inappropriate, or spammy
- "safe" if the content is appropriate

File content:
{content}
"#;

pub fn build_classify_prompt(content: &str) -> String {
    CLASSIFY_PROMPT_TEMPLATE.replace("{content}", content)
}
