use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use planty_core::{IdentificationRequest, VisionModel};

/// A vision model that returns a canned reply and remembers what it was sent.
pub struct StubVisionModel {
    reply: std::result::Result<String, String>,
    last_request: Mutex<Option<IdentificationRequest>>,
}

impl StubVisionModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<IdentificationRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl VisionModel for StubVisionModel {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &IdentificationRequest) -> Result<String> {
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.reply.clone().map_err(|message| anyhow!(message))
    }
}
