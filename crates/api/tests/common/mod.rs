#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use talent_api::config::ServerConfig;
use talent_api::router::build_app_router;
use talent_api::state::AppState;
use talent_core::persist::PersistScope;
use tower::ServiceExt;

pub const BOUNDARY: &str = "talent-test-boundary";

pub const HEADER_ROW: &str = "Name,Designation,Company Name,Experience(Years),CTC currency,CTC,CTC Type,Email ID,Contact Number,LinkedIn Link,Location";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        upload_created_by: "integration-test".to_string(),
        persist_scope: PersistScope::AllRows,
        database_url: String::new(),
        database_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState::new(pool, config))
}

/// A valid CSV data row.
pub fn csv_row(name: &str, email: &str, contact: &str) -> String {
    format!(
        "{name},Backend Engineer,Acme Corp,4,INR,18.5,LAKHS,{email},{contact},https://linkedin.com/in/{name},Bengaluru"
    )
}

/// A CSV file with the standard header followed by `rows`.
pub fn csv_file(rows: &[String]) -> String {
    let mut body = String::from(HEADER_ROW);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    body
}

/// Encode one file part as `multipart/form-data`.
pub fn multipart_body(field: &str, file_name: &str, content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a CSV file under `field` to `/upload-candidates`.
pub async fn upload_csv(app: Router, field: &str, csv: &str) -> Response<Body> {
    let body = multipart_body(field, "candidates.csv", "text/csv", csv.as_bytes());
    let request = Request::builder()
        .method("POST")
        .uri("/upload-candidates")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
