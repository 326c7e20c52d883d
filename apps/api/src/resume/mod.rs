// Resume synthesis: free-form resume text → validated `ResumeData`.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod synthesizer;
