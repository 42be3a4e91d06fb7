use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use planty_core::VisionModel;
use planty_gateway::{build_router, GatewayState};
use planty_understanding::StubVisionModel;

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

const ALL_LABELS: &str = "\
Name: Rose
Scientific Name: Rosa
Family: Rosaceae
Description: A woody perennial flowering plant.
Native to: Asia, Europe, North America
Sunlight needs: Full sun
Watering needs: Deeply, twice a week
Soil type: Loamy, well-drained
";

/// Serve the router on an ephemeral port; returns its base URL.
async fn spawn_app(model: Arc<dyn VisionModel>, max_upload_bytes: usize) -> String {
    let app = build_router(GatewayState::new(model), max_upload_bytes);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn image_form(bytes: &[u8], mime: &str) -> Form {
    let part = Part::bytes(bytes.to_vec())
        .file_name("leaf.png")
        .mime_str(mime)
        .unwrap();
    Form::new().part("image", part)
}

async fn post_form(base: &str, form: Form) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/identify-plant"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn all_labels_yield_complete_plant_info() {
    let model = Arc::new(StubVisionModel::replying(ALL_LABELS));
    let base = spawn_app(model.clone(), 1024 * 1024).await;

    let (status, body) = post_form(&base, image_form(PNG_HEADER, "image/png")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "name": "Rose",
            "scientificName": "Rosa",
            "family": "Rosaceae",
            "description": "A woody perennial flowering plant.",
            "nativeTo": ["Asia", "Europe", "North America"],
            "sunlight": "Full sun",
            "watering": "Deeply, twice a week",
            "soil": "Loamy, well-drained"
        })
    );

    let sent = model.last_request().unwrap();
    assert_eq!(sent.mime_type, "image/png");
    assert!(!sent.image_base64.is_empty());
}

#[tokio::test]
async fn partial_labels_omit_optional_fields() {
    let model = Arc::new(StubVisionModel::replying("Name: Rose\nNative to: Asia"));
    let base = spawn_app(model, 1024 * 1024).await;

    let (status, body) = post_form(&base, image_form(PNG_HEADER, "image/png")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Rose");
    assert_eq!(body["nativeTo"], json!(["Asia"]));
    assert_eq!(body["description"], "No description available.");
    assert!(body.get("sunlight").is_none());
    assert!(body.get("watering").is_none());
    assert!(body.get("soil").is_none());
}

#[tokio::test]
async fn missing_image_field_is_bad_request() {
    let base = spawn_app(Arc::new(StubVisionModel::replying(ALL_LABELS)), 1024 * 1024).await;

    let form = Form::new().text("note", "no picture here");
    let (status, body) = post_form(&base, form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No image provided" }));
}

#[tokio::test]
async fn empty_image_field_is_bad_request() {
    let base = spawn_app(Arc::new(StubVisionModel::replying(ALL_LABELS)), 1024 * 1024).await;

    let (status, body) = post_form(&base, image_form(&[], "image/png")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn non_multipart_body_is_bad_request() {
    let base = spawn_app(Arc::new(StubVisionModel::replying(ALL_LABELS)), 1024 * 1024).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/identify-plant"))
        .json(&json!({ "image": "not a file" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn model_failure_is_server_error_with_details_and_stack() {
    let base = spawn_app(Arc::new(StubVisionModel::failing("quota exhausted")), 1024 * 1024).await;

    let (status, body) = post_form(&base, image_form(PNG_HEADER, "image/png")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to identify plant");
    assert_eq!(body["details"], "quota exhausted");
    assert!(body.get("stack").is_some());
}

#[tokio::test]
async fn empty_model_text_is_server_error() {
    let base = spawn_app(Arc::new(StubVisionModel::replying("")), 1024 * 1024).await;

    let (status, body) = post_form(&base, image_form(PNG_HEADER, "image/png")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["details"], "No text generated from the model");
}

#[tokio::test]
async fn generic_content_type_is_sniffed() {
    let model = Arc::new(StubVisionModel::replying(ALL_LABELS));
    let base = spawn_app(model.clone(), 1024 * 1024).await;

    let (status, _) = post_form(&base, image_form(PNG_HEADER, "application/octet-stream")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(model.last_request().unwrap().mime_type, "image/png");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let base = spawn_app(Arc::new(StubVisionModel::replying(ALL_LABELS)), 64).await;

    let (status, body) = post_form(&base, image_form(&[0u8; 4096], "image/png")).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Invalid image upload");
}

#[tokio::test]
async fn serves_health_and_client_page() {
    let base = spawn_app(Arc::new(StubVisionModel::replying(ALL_LABELS)), 1024 * 1024).await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base}/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["model"], "stub");

    let page = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    assert!(page.text().await.unwrap().contains("/app.js"));

    let script = client.get(format!("{base}/app.js")).send().await.unwrap();
    assert_eq!(script.status(), StatusCode::OK);
    assert!(script.text().await.unwrap().contains("/api/identify-plant"));
}
