pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ingest::handlers as ingest;
use crate::resume::handlers as resume;
use crate::safety::handlers as safety;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/synthesize",
            post(resume::handle_synthesize),
        )
        .route("/api/v1/content/classify", post(safety::handle_classify))
        .route("/api/v1/uploads", post(ingest::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::StubGenerator;

    const BOUNDARY: &str = "folio-test-boundary";

    fn router_with(stub: StubGenerator) -> Router {
        router_with_limit(stub, 1024 * 1024)
    }

    fn router_with_limit(stub: StubGenerator, max_upload_bytes: usize) -> Router {
        build_router(AppState {
            generator: Arc::new(stub),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                llm_max_retries: 0,
                max_upload_bytes,
            },
        })
    }

    fn resume_json() -> Value {
        json!({
            "header": {
                "name": "Jane Doe",
                "shortAbout": "Senior Backend Engineer",
                "location": "",
                "contacts": {"github": "jane doe"},
                "skills": ["Python", "Go"]
            },
            "summary": "Backend engineer.",
            "workExperience": [{
                "company": "Acme",
                "link": "",
                "location": "",
                "contract": "Full-time",
                "title": "Senior Backend Engineer",
                "start": "2019-01-01",
                "end": null,
                "description": ""
            }],
            "education": []
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_upload(file_name: &str, content_type: &str, contents: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {contents}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::post("/api/v1/uploads")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router_with(StubGenerator::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_synthesize_returns_resume() {
        let router = router_with(StubGenerator::replying(&resume_json().to_string()));
        let response = router
            .oneshot(post_json(
                "/api/v1/resumes/synthesize",
                json!({"resume_text": "Jane Doe, Senior Backend Engineer at Acme since 2019, Python and Go"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["resume"]["header"]["name"], "Jane Doe");
        assert_eq!(body["resume"]["header"]["contacts"]["github"], "");
        assert_eq!(body["resume"]["workExperience"][0]["end"], Value::Null);
    }

    #[tokio::test]
    async fn test_synthesize_unusable_output_is_422() {
        let router = router_with(StubGenerator::replying("```json\n{}\n```"));
        let response = router
            .oneshot(post_json(
                "/api/v1/resumes/synthesize",
                json!({"resume_text": "Jane Doe"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_synthesize_empty_text_is_400() {
        let stub = StubGenerator::default();
        let response = router_with(stub)
            .oneshot(post_json(
                "/api/v1/resumes/synthesize",
                json!({"resume_text": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_classify_reports_verdict() {
        let router = router_with(StubGenerator::replying("Unsafe."));
        let response = router
            .oneshot(post_json(
                "/api/v1/content/classify",
                json!({"content": "buy followers now"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["unsafe"], true);
        assert_eq!(body["verdict"], "unsafe");
    }

    #[tokio::test]
    async fn test_classify_call_failure_is_502() {
        let router = router_with(StubGenerator::failing());
        let response = router
            .oneshot(post_json(
                "/api/v1/content/classify",
                json!({"content": "hello"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_upload_text_file_returns_draft() {
        let stub = StubGenerator::replying("safe").then_reply(&resume_json().to_string());
        let response = router_with(stub)
            .oneshot(post_upload("cv.txt", "text/plain", "Jane Doe\nAcme, 2019 - now"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["resume"]["status"], "draft");
        assert_eq!(body["resume"]["resumeData"]["header"]["skills"], json!(["Python", "Go"]));
    }

    #[tokio::test]
    async fn test_upload_unsafe_file_is_rejected() {
        let stub = StubGenerator::replying("unsafe");
        let response = router_with(stub)
            .oneshot(post_upload("cv.txt", "text/plain", "spam"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(read_json(response).await["error"]["code"], "UNSAFE_CONTENT");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_413() {
        let stub = StubGenerator::default();
        let contents = "x".repeat(64);
        let response = router_with_limit(stub, 16)
            .oneshot(post_upload("cv.txt", "text/plain", &contents))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_400() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhi\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::post("/api/v1/uploads")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = router_with(StubGenerator::default())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
