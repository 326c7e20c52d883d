//! Resume Synthesizer — one LLM call turning free-form resume text into `ResumeData`.
//!
//! Flow: build prompt → generate (JSON) → parse → schema::validate.
//!
//! Every failure (call error, malformed JSON, schema violation) is logged and
//! collapses to `None`. Callers treat synthesis as best-effort and fall back to
//! manual entry; nothing here returns an error across `synthesize`.

use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmError, ResponseFormat, TextGenerator};
use crate::models::resume::ResumeData;
use crate::resume::prompts::build_resume_prompt;
use crate::resume::schema::{validate, SchemaViolation};

/// Why a synthesis attempt produced no resume. Internal to this module's logging.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("generation call failed: {0}")]
    Generation(#[from] LlmError),

    #[error("response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

/// Synthesizes a structured resume, or `None` when the model output can't be trusted.
pub async fn synthesize(generator: &dyn TextGenerator, resume_text: &str) -> Option<ResumeData> {
    match try_synthesize(generator, resume_text).await {
        Ok(resume) => Some(resume),
        Err(e) => {
            match &e {
                SynthesisError::Schema(violation) => warn!(
                    path = violation.first_path(),
                    violations = violation.violations.len(),
                    "Impossible generating resume object: {e}"
                ),
                _ => warn!("Impossible generating resume object: {e}"),
            }
            None
        }
    }
}

async fn try_synthesize(
    generator: &dyn TextGenerator,
    resume_text: &str,
) -> Result<ResumeData, SynthesisError> {
    let prompt = build_resume_prompt(resume_text);

    let started = Instant::now();
    let response = generator.generate(&prompt, ResponseFormat::Json).await;
    info!(
        "Generating resume object took {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    // No fence stripping: anything but bare JSON counts as malformed.
    let parsed: serde_json::Value = serde_json::from_str(&response?)?;
    Ok(validate(&parsed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGenerator;
    use serde_json::json;

    fn jane_doe() -> serde_json::Value {
        json!({
            "header": {
                "name": "Jane Doe",
                "shortAbout": "Senior Backend Engineer",
                "location": "",
                "contacts": {
                    "website": "",
                    "email": "",
                    "phone": "",
                    "twitter": "",
                    "linkedin": "",
                    "github": ""
                },
                "skills": ["Python", "Go"]
            },
            "summary": "Backend engineer building services in Python and Go.",
            "workExperience": [{
                "company": "Acme",
                "link": "",
                "location": "",
                "contract": "Full-time",
                "title": "Senior Backend Engineer",
                "start": "2019-01-01",
                "end": null,
                "description": "Backend development."
            }],
            "education": []
        })
    }

    const JANE_TEXT: &str = "Jane Doe, Senior Backend Engineer at Acme since 2019, Python and Go";

    #[tokio::test]
    async fn test_conformant_response_is_returned_unchanged() {
        let body = jane_doe();
        let stub = StubGenerator::replying(&body.to_string());

        let resume = synthesize(&stub, JANE_TEXT).await.unwrap();

        assert_eq!(serde_json::to_value(&resume).unwrap(), body);
        assert_eq!(resume.header.skills, vec!["Python", "Go"]);
        assert!(resume.work_experience[0].is_current());
    }

    #[tokio::test]
    async fn test_requests_json_with_text_in_prompt() {
        let stub = StubGenerator::replying(&jane_doe().to_string());
        synthesize(&stub, JANE_TEXT).await;

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, ResponseFormat::Json);
        assert!(calls[0].0.contains(JANE_TEXT));
    }

    #[tokio::test]
    async fn test_truncated_json_yields_none() {
        let full = jane_doe().to_string();
        let stub = StubGenerator::replying(&full[..full.len() / 2]);
        assert!(synthesize(&stub, JANE_TEXT).await.is_none());
    }

    #[tokio::test]
    async fn test_markdown_fenced_json_yields_none() {
        let fenced = format!("```json\n{}\n```", jane_doe());
        let stub = StubGenerator::replying(&fenced);
        assert!(synthesize(&stub, JANE_TEXT).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_response_yields_none() {
        let stub = StubGenerator::replying("");
        assert!(synthesize(&stub, JANE_TEXT).await.is_none());
    }

    #[tokio::test]
    async fn test_eleven_skills_yields_none() {
        let mut body = jane_doe();
        body["header"]["skills"] = json!([
            "Python", "Go", "Rust", "SQL", "Kafka", "Docker", "Kubernetes", "AWS", "gRPC",
            "Redis", "Terraform"
        ]);
        let stub = StubGenerator::replying(&body.to_string());
        assert!(synthesize(&stub, JANE_TEXT).await.is_none());
    }

    #[tokio::test]
    async fn test_generation_failure_yields_none() {
        let stub = StubGenerator::failing();
        assert!(synthesize(&stub, JANE_TEXT).await.is_none());
    }

    #[tokio::test]
    async fn test_whitespace_handle_is_blanked() {
        let mut body = jane_doe();
        body["header"]["contacts"]["twitter"] = json!("john doe 123");
        let stub = StubGenerator::replying(&body.to_string());

        let resume = synthesize(&stub, JANE_TEXT).await.unwrap();
        assert_eq!(resume.header.contacts.twitter, "");
    }

    #[tokio::test]
    async fn test_try_synthesize_classifies_failures() {
        let stub = StubGenerator::replying("not json");
        assert!(matches!(
            try_synthesize(&stub, JANE_TEXT).await,
            Err(SynthesisError::MalformedResponse(_))
        ));

        let stub = StubGenerator::replying(r#"{"header": {}}"#);
        assert!(matches!(
            try_synthesize(&stub, JANE_TEXT).await,
            Err(SynthesisError::Schema(_))
        ));

        let stub = StubGenerator::failing();
        assert!(matches!(
            try_synthesize(&stub, JANE_TEXT).await,
            Err(SynthesisError::Generation(_))
        ));
    }
}
