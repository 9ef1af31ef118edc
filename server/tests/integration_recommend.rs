use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use skillmatch_core::catalog::write_jsonl;
use skillmatch_core::{Engine, Recommender, RoleRecord, Settings};
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

fn tiny_roles() -> Vec<RoleRecord> {
    vec![
        RoleRecord::new("Data Scientist", "python, sql, pandas, machine learning", 1_200_000),
        RoleRecord::new("Frontend Developer", "html, css, javascript, react", 800_000),
    ]
}

fn ready_app() -> Router {
    let engine = Engine::build(tiny_roles(), Settings::default()).unwrap();
    skillmatch_server::build_app(Arc::new(Recommender::with_engine(engine)))
}

async fn call(app: Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn recommend_returns_enriched_results() {
    let (status, body) = call(ready_app(), post_json("/recommend", json!({"skills": "python, sql", "top_n": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total_results"], 1);
    assert_eq!(json["input_skills"], "python, sql");
    let top = &json["recommendations"][0];
    assert_eq!(top["role"], "Data Scientist");
    assert_eq!(top["avg_salary"], 1_200_000);
    assert_eq!(top["strengths"], json!(["python", "sql"]));
    assert_eq!(top["missing_skills"], json!(["pandas", "machine learning"]));
    assert_eq!(top["action_plan"].as_array().unwrap().len(), 4);
    assert!(top["match_score"].as_f64().unwrap() > 0.0);
    assert!(top["headline"].as_str().is_some());
}

#[tokio::test]
async fn top_n_defaults_to_three() {
    let (status, body) = call(ready_app(), post_json("/recommend", json!({"skills": "react"}))).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    // only two roles in the catalog
    assert_eq!(json["total_results"], 2);
}

#[tokio::test]
async fn unknown_skills_set_no_strong_match() {
    let (status, body) = call(ready_app(), post_json("/recommend", json!({"skills": "origami, pottery", "top_n": 2}))).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["no_strong_match"], true);
    assert!(json["suggestion"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(json["recommendations"].as_array().unwrap().iter().all(|r| r["low_confidence"] == true));
}

#[tokio::test]
async fn invalid_input_is_unprocessable() {
    let (status, body) = call(ready_app(), post_json("/recommend", json!({"skills": "   ", "top_n": 3}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = call(ready_app(), post_json("/recommend", json!({"skills": "python", "top_n": 11}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_body_is_validation_error() {
    for body in [json!({"skills": "python", "top_n": -1}), json!({"top_n": 3}), json!({"skills": null})] {
        let (status, bytes) = call(ready_app(), post_json("/recommend", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn not_ready_is_service_unavailable() {
    let app = skillmatch_server::build_app(Arc::new(Recommender::new(Settings::default())));
    let (status, body) = call(app.clone(), post_json("/recommend", json!({"skills": "python"}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_READY");

    let (status, _) = call(app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn health_reports_dataset_size() {
    let (status, body) = call(ready_app(), Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model_ready"], true);
    assert_eq!(json["dataset_rows"], 2);
}

#[test]
fn load_roles_reads_catalog_file_or_falls_back() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("roles.jsonl");
    write_jsonl(&file, &tiny_roles()).unwrap();
    let loaded = skillmatch_server::load_roles(Some(file.to_str().unwrap())).unwrap();
    assert_eq!(loaded, tiny_roles());
    assert!(skillmatch_server::load_roles(None).unwrap().len() > 2);
}
