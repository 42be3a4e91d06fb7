use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::ImageSubmission;

/// Instruction sent alongside every image.
pub const IDENTIFY_PROMPT: &str = "Identify this plant and provide its name, scientific name, \
family, brief description, where it's native to, sunlight needs, watering needs, and soil type. \
Answer with exactly one line per item, each starting with its label:\n\
Name:\nScientific Name:\nFamily:\nDescription:\nNative to: (comma-separated regions)\n\
Sunlight needs:\nWatering needs:\nSoil type:";

/// Content categories the model provider can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Probability at which the provider starts blocking a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Filtering applied to every identification call. Enforcement is the provider's.
pub const SAFETY_SETTINGS: [SafetySetting; 1] = [SafetySetting {
    category: HarmCategory::Harassment,
    threshold: HarmBlockThreshold::BlockMediumAndAbove,
}];

/// A single model call: prompt, base64 image, and safety settings.
#[derive(Debug, Clone)]
pub struct IdentificationRequest {
    pub prompt: String,
    pub mime_type: String,
    /// Standard base64 (with padding) of the image bytes.
    pub image_base64: String,
    pub safety_settings: Vec<SafetySetting>,
}

impl IdentificationRequest {
    /// Build the fixed identification request for an image.
    pub fn for_image(image: &ImageSubmission, image_base64: String) -> Self {
        Self {
            prompt: IDENTIFY_PROMPT.to_string(),
            mime_type: image.mime_type.clone(),
            image_base64,
            safety_settings: SAFETY_SETTINGS.to_vec(),
        }
    }
}

/// A multimodal model that answers an image + prompt with free text.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Model name, for logs.
    fn name(&self) -> &str;

    /// Run one generation and return the model's text.
    async fn generate(&self, request: &IdentificationRequest) -> Result<String>;
}
