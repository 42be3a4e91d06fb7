//! `POST /api/identify-plant`.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::{info, warn};

use planty_core::{ImageSubmission, PlantInfo};
use planty_media::resolve_image_mime;
use planty_understanding::identify_plant;

use crate::error::IdentifyError;
use crate::server::GatewayState;

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// Identify the plant in the uploaded `image` field.
///
/// A body that is not multipart, has no `image` field, or has an empty one is
/// answered with 400.
pub async fn identify_plant_handler(
    State(state): State<GatewayState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PlantInfo>, IdentifyError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(reason = %rejection, "Request body is not multipart");
            return Err(IdentifyError::MissingImage);
        }
    };

    let image = read_image_field(&mut multipart)
        .await?
        .ok_or(IdentifyError::MissingImage)?;
    info!(
        bytes = image.data.len(),
        mime = %image.mime_type,
        file_name = image.file_name.as_deref().unwrap_or("-"),
        "Received image"
    );

    let plant = identify_plant(state.model.as_ref(), &image)
        .await
        .map_err(IdentifyError::Model)?;
    Ok(Json(plant))
}

/// First non-empty `image` field, with its MIME type resolved.
async fn read_image_field(multipart: &mut Multipart) -> Result<Option<ImageSubmission>, IdentifyError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let declared = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Ok(None);
        }

        let mime = resolve_image_mime(declared.as_deref(), file_name.as_deref(), &data);
        let mut image = ImageSubmission::new(data.to_vec(), mime);
        if let Some(name) = file_name {
            image = image.with_file_name(name);
        }
        return Ok(Some(image));
    }
    Ok(None)
}
