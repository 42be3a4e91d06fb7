//! Plant identification: one model call, then label parsing.

use anyhow::{Result, bail};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{debug, info};

use planty_core::{IdentificationRequest, ImageSubmission, PlantInfo, VisionModel, parse_plant_info};

/// Send `image` to `model` with the fixed prompt and parse the labelled answer.
///
/// Fails when the model call fails or the model produces no text.
pub async fn identify_plant(model: &dyn VisionModel, image: &ImageSubmission) -> Result<PlantInfo> {
    let request = IdentificationRequest::for_image(image, STANDARD.encode(&image.data));
    info!(
        model = model.name(),
        mime = %image.mime_type,
        bytes = image.data.len(),
        "Generating content"
    );

    let text = model.generate(&request).await?;
    debug!(text = %text, "Generated text");
    if text.trim().is_empty() {
        bail!("No text generated from the model");
    }

    let plant = parse_plant_info(&text);
    debug!(?plant, "Parsed plant info");
    Ok(plant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::StubVisionModel;

    #[tokio::test]
    async fn encodes_image_as_base64() {
        let model = StubVisionModel::replying("Name: Basil\nFamily: Lamiaceae");
        let image = ImageSubmission::new(b"hello".to_vec(), "image/webp");

        let plant = identify_plant(&model, &image).await.unwrap();
        assert_eq!(plant.name, "Basil");
        assert_eq!(plant.family, "Lamiaceae");

        let sent = model.last_request().unwrap();
        assert_eq!(sent.image_base64, "aGVsbG8=");
        assert_eq!(sent.mime_type, "image/webp");
    }

    #[tokio::test]
    async fn empty_text_is_an_error() {
        let model = StubVisionModel::replying("  \n");
        let image = ImageSubmission::new(vec![1], "image/png");
        let err = identify_plant(&model, &image).await.unwrap_err();
        assert_eq!(err.to_string(), "No text generated from the model");
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let model = StubVisionModel::failing("quota exhausted");
        let image = ImageSubmission::new(vec![1], "image/png");
        let err = identify_plant(&model, &image).await.unwrap_err();
        assert!(err.to_string().contains("quota exhausted"));
    }
}
