use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use planty_core::ErrorResponse;
use planty_logging::redact_sensitive_data;

pub const NO_IMAGE_PROVIDED: &str = "No image provided";
pub const INVALID_UPLOAD: &str = "Invalid image upload";
pub const FAILED_TO_IDENTIFY: &str = "Failed to identify plant";

/// Every way the identify route can fail. Converted to an [`ErrorResponse`]
/// body at the handler boundary.
#[derive(Debug, Error)]
pub enum IdentifyError {
    #[error("no image provided")]
    MissingImage,

    #[error("invalid image upload: {0}")]
    InvalidUpload(#[from] MultipartError),

    #[error("model call failed: {0:#}")]
    Model(anyhow::Error),
}

impl IdentifyError {
    pub fn status(&self) -> StatusCode {
        match self {
            IdentifyError::MissingImage => StatusCode::BAD_REQUEST,
            IdentifyError::InvalidUpload(e) => e.status(),
            IdentifyError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body sent to the client.
    ///
    /// Model failures carry the full error chain and its debug rendering,
    /// which includes a backtrace when `RUST_BACKTRACE` is set.
    pub fn body(&self) -> ErrorResponse {
        match self {
            IdentifyError::MissingImage => ErrorResponse::new(NO_IMAGE_PROVIDED),
            IdentifyError::InvalidUpload(e) => ErrorResponse::new(INVALID_UPLOAD).with_details(e.body_text()),
            IdentifyError::Model(e) => ErrorResponse::new(FAILED_TO_IDENTIFY)
                .with_details(format!("{e:#}"))
                .with_stack(format!("{e:?}")),
        }
    }
}

impl IntoResponse for IdentifyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            IdentifyError::Model(_) => {
                error!(status = %status, error = %redact_sensitive_data(&self.to_string()), "Error identifying plant")
            }
            _ => warn!(status = %status, error = %self, "Rejected identify request"),
        }
        (status, Json(self.body())).into_response()
    }
}
