//! Multimodal Model Strategy
//!
//! Image generation goes through `MultimodalModel` so a real provider can
//! replace the mock without touching seeding.
//!
//! ```rust,ignore
//! let model = MockMultimodalModel::new();
//! let url = generate_avatar(&model, "asian man with glasses").await?;
//! ```

mod mock;

pub use mock::MockMultimodalModel;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// System prompt sent with avatar requests
pub const AVATAR_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates professional avatar images.";

/// Leading phrase that marks an avatar request
pub const AVATAR_REQUEST_MARKER: &str = "Generate a professional headshot avatar";

/// A role-tagged message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMessage {
    pub role: String,
    pub content: String,
}

impl ModelMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Image generation request
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageRequest {
    pub system: String,
    pub messages: Vec<ModelMessage>,
}

impl ImageRequest {
    /// Build the headshot request for a descriptive prompt
    pub fn avatar(prompt: &str) -> Self {
        Self {
            system: AVATAR_SYSTEM_PROMPT.into(),
            messages: vec![ModelMessage::user(format!(
                "{AVATAR_REQUEST_MARKER} for {prompt}. Make it look like a professional \
                 profile picture with a neutral background."
            ))],
        }
    }
}

/// Generated image reference
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_url: String,
}

/// Strategy trait for multimodal (image) models
#[async_trait]
pub trait MultimodalModel: Send + Sync {
    /// Generate an image for the request
    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse>;

    /// Model name for logs
    fn name(&self) -> &str;
}

/// Ask `model` for a headshot avatar and return its URL
pub async fn generate_avatar(model: &dyn MultimodalModel, prompt: &str) -> Result<String> {
    let response = model.generate_image(&ImageRequest::avatar(prompt)).await?;
    tracing::debug!(model = model.name(), prompt, url = %response.image_url, "Generated avatar");
    Ok(response.image_url)
}
