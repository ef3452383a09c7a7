use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::analysis::router::analyze_handler;
use crate::analysis::{analysis_router, ExtractedDocument, ResumeAnalyzer, UploadPolicy};

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

fn strong_document() -> ExtractedDocument {
    let lines = strong_resume_lines();
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    document("jane_doe.pdf", &lines, STRONG_HEADER)
}

#[tokio::test]
async fn analyze_handler_returns_scored_outcome() {
    let analyzer = Arc::new(ResumeAnalyzer::default());

    let response = analyze_handler(State(analyzer), axum::Json(strong_document()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["score"], 100);
    assert_eq!(body["status"], "ATS-Safe");
    assert_eq!(body["document"]["file_name"], "jane_doe.pdf");
    assert!(body["issues"].as_array().expect("issues array").is_empty());
}

#[tokio::test]
async fn analyze_handler_rejects_unsupported_file_type() {
    let analyzer = Arc::new(ResumeAnalyzer::default());
    let mut document = strong_document();
    document.file_name = "jane_doe.docx".to_string();

    let response = analyze_handler(State(analyzer), axum::Json(document))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("jane_doe.docx"));
}

#[tokio::test]
async fn analyze_handler_rejects_document_without_pages() {
    let analyzer = Arc::new(ResumeAnalyzer::default());
    let document = ExtractedDocument {
        file_name: "blank.pdf".to_string(),
        pages: Vec::new(),
    };

    let response = analyze_handler(State(analyzer), axum::Json(document))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("extraction error"));
}

#[tokio::test]
async fn router_accepts_configured_extensions() {
    let analyzer = Arc::new(ResumeAnalyzer::new(UploadPolicy::new(["pdf", "txt"])));
    let mut document = strong_document();
    document.file_name = "resume.TXT".to_string();
    let payload = serde_json::to_vec(&document).expect("document serializes");

    let response = analysis_router(analyzer)
        .oneshot(
            Request::post("/api/v1/resume/analyze")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["document"]["page_count"], 1);
    assert_eq!(
        body["category_scores"]["ATS Essentials"],
        body["category_max_scores"]["ATS Essentials"]
    );
}

#[tokio::test]
async fn router_groups_recommendations_by_priority() {
    let analyzer = Arc::new(ResumeAnalyzer::default());
    let payload = r#"{
        "file_name": "john.pdf",
        "pages": [{
            "height": 792.0,
            "lines": ["JOHN SMITH", "Software Engineer", "EDUCATION", "BS CS 2020", "SKILLS", "Python, SQL"],
            "words": [{"text": "JOHN", "top": 30.0}, {"text": "SMITH", "top": 30.0}]
        }]
    }"#;

    let response = analysis_router(analyzer)
        .oneshot(
            Request::post("/api/v1/resume/analyze")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["score"], 65);
    assert_eq!(body["status"], "Borderline");
    let high = body["recommendations"]["High"]
        .as_array()
        .expect("high priority group");
    assert_eq!(high.len(), 4);
    assert!(high[0].get("penalty").is_none());
    assert_eq!(body["recommendations"]["Medium"][0]["category"], "ATS Essentials");
}
