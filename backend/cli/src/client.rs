//! Terminal capture/upload client for `POST /api/identify-plant`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::debug;

use planty_core::{ClientState, ErrorResponse, ImageSubmission, PlantInfo};
use planty_media::resolve_image_mime;

use crate::terminal_output::{note_info, render_error, render_plant, supports_color};

pub const DEFAULT_SERVER: &str = "http://localhost:3000";
const IDENTIFY_PATH: &str = "/api/identify-plant";
const IMAGE_FIELD: &str = "image";
const FAILED_TO_IDENTIFY: &str = "Failed to identify plant";

/// Read an image file and work out its MIME type.
pub fn load_image(path: &Path) -> Result<ImageSubmission> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path.file_name().and_then(|n| n.to_str()).map(str::to_string);
    let mime = resolve_image_mime(None, file_name.as_deref(), &data);

    let mut image = ImageSubmission::new(data, mime);
    if let Some(name) = file_name {
        image = image.with_file_name(name);
    }
    Ok(image)
}

/// Turn a response status and body into the client's outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<PlantInfo, ErrorResponse> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| {
            ErrorResponse::new(FAILED_TO_IDENTIFY).with_details(format!("Unexpected response body: {e}"))
        });
    }
    Err(ErrorResponse::from_body(body).unwrap_or_else(|| {
        ErrorResponse::new(FAILED_TO_IDENTIFY).with_details(format!("Server responded with {status}"))
    }))
}

pub struct IdentifyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IdentifyClient {
    pub fn new(server: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{IDENTIFY_PATH}", server.trim_end_matches('/')),
        }
    }

    /// Upload one image. Transport failures are folded into an [`ErrorResponse`].
    pub async fn submit(&self, image: ImageSubmission) -> Result<PlantInfo, ErrorResponse> {
        let transport = |e: reqwest::Error| ErrorResponse::new(FAILED_TO_IDENTIFY).with_details(e.to_string());

        let file_name = image.file_name.unwrap_or_else(|| "upload".to_string());
        let part = Part::bytes(image.data)
            .file_name(file_name)
            .mime_str(&image.mime_type)
            .map_err(transport)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(endpoint = %self.endpoint, "Submitting image");
        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport)?;
        interpret_response(status, &body)
    }
}

/// Print the current state.
pub fn render(state: &ClientState) {
    let color = supports_color();
    match state {
        ClientState::Idle => {}
        ClientState::Loading => note_info("Identifying plant..."),
        ClientState::Failed(error) => eprint!("{}", render_error(error, color)),
        ClientState::Identified(plant) => print!("{}", render_plant(plant, color)),
    }
}

/// `planty identify <FILE>`: upload, wait, show the result.
pub async fn run_identify(path: &Path, server: &str) -> Result<()> {
    let image = load_image(path)?;
    let client = IdentifyClient::new(server);

    let mut state = ClientState::default();
    state.begin();
    render(&state);
    state.finish(client.submit(image).await);
    render(&state);

    if let ClientState::Failed(error) = &state {
        bail!("{}", error.error);
    }
    Ok(())
}
