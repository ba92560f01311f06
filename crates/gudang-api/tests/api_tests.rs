//! Router-level tests that run without a database server.
//!
//! The pool is built lazily, so endpoints that fail before their first query
//! (validation, missing multipart fields) can be exercised offline.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tempfile::TempDir;
use tower::ServiceExt;

use gudang_api::setup::routes::create_router;
use gudang_api::state::AppState;
use gudang_core::{Config, StorageBackend};
use gudang_db::LoaderRequestRepository;
use gudang_report::{HttpPhotoFetcher, ReportGenerator};
use gudang_storage::LogoStore;

fn test_config(dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgres://localhost:1/unreachable".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 1,
        storage_backend: Some(StorageBackend::Local),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: Some(dir.path().join("photos").display().to_string()),
        local_storage_base_url: Some("http://localhost/files".to_string()),
        asset_path: dir.path().join("assets").display().to_string(),
        max_photo_size_bytes: 10 * 1024 * 1024,
        photo_allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
        photo_allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        report_output_dir: dir.path().join("reports").display().to_string(),
    }
}

async fn test_app(dir: &TempDir) -> (Router, LogoStore) {
    let config = test_config(dir);
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database_url)
        .unwrap();
    let repository = LoaderRequestRepository::new(pool.clone());
    let logo_store = LogoStore::new(config.asset_path.clone());
    let state = Arc::new(AppState {
        config,
        pool,
        repository,
        logo_store: logo_store.clone(),
        report_generator: Arc::new(ReportGenerator::new(Box::new(HttpPhotoFetcher::new()))),
    });
    (create_router(state), logo_store)
}

fn multipart_body(field_name: &str, payload: &[u8]) -> (String, Vec<u8>) {
    let boundary = "test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"logo.png\"\r\n\r\n",
            field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    (
        format!("multipart/form-data; boundary={}", boundary),
        body,
    )
}

#[tokio::test]
async fn test_health_is_ok() {
    let dir = TempDir::new().unwrap();
    let (router, _) = test_app(&dir).await;
    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_rejects_negative_counter_before_database() {
    let dir = TempDir::new().unwrap();
    let (router, _) = test_app(&dir).await;
    let payload = serde_json::json!({
        "date": "01/01/2024",
        "shift": "morning",
        "nikeMP": -3,
        "timeInNike": "08:00",
        "shipperName": "Acme",
        "receiptDate": "01/01/2024",
        "noDocument": "DOC-1",
        "transaction": "Outbound",
        "vehicleNo": "B1234",
        "containerNo": "CONT-9",
        "warehouseName": "WH-A"
    });
    let response = router
        .oneshot(
            Request::post("/api/v0/loader-requests")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logo_upload_without_file_is_rejected_before_store() {
    let dir = TempDir::new().unwrap();
    let (router, logo_store) = test_app(&dir).await;
    let (content_type, body) = multipart_body("attachment", b"not-the-logo-field");
    let response = router
        .oneshot(
            Request::post("/api/v0/logo")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!logo_store.logo_path().exists());
}

#[tokio::test]
async fn test_logo_upload_saves_single_slot_asset() {
    let dir = TempDir::new().unwrap();
    let (router, logo_store) = test_app(&dir).await;
    let (content_type, body) = multipart_body("logo", &[0x89, b'P', b'N', b'G']);
    let response = router
        .oneshot(
            Request::post("/api/v0/logo")
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(logo_store.logo_path().exists());
}

#[tokio::test]
async fn test_startup_rejects_zero_photo_size_limit() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.max_photo_size_bytes = 0;
    let err = gudang_api::setup::initialize_app(config).await.unwrap_err();
    assert!(err.to_string().contains("MAX_PHOTO_SIZE_MB"));
}

#[tokio::test]
async fn test_startup_rejects_missing_local_storage_base_url() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.local_storage_base_url = None;
    let err = gudang_api::setup::initialize_app(config).await.unwrap_err();
    assert!(err.to_string().contains("LOCAL_STORAGE_BASE_URL"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let (router, _) = test_app(&dir).await;
    let response = router
        .oneshot(Request::get("/api/v0/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
