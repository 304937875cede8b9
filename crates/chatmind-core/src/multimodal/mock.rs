//! Mock Multimodal Model
//!
//! Returns canned placeholder URLs instead of generating images.

use async_trait::async_trait;

use super::{AVATAR_REQUEST_MARKER, ImageRequest, ImageResponse, MultimodalModel};
use crate::avatar::{DEFAULT_AVATAR_URL, resolve_avatar};
use crate::error::Result;

/// Keyword-matching stand-in for an image model
#[derive(Clone, Debug, Default)]
pub struct MockMultimodalModel;

impl MockMultimodalModel {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MultimodalModel for MockMultimodalModel {
    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse> {
        tracing::debug!(system = %request.system, messages = request.messages.len(), "Mock model request");

        let image_url = match request.messages.first() {
            Some(message) if message.content.contains(AVATAR_REQUEST_MARKER) => {
                resolve_avatar(&message.content)
            }
            _ => DEFAULT_AVATAR_URL,
        };

        Ok(ImageResponse {
            image_url: image_url.to_string(),
        })
    }

    fn name(&self) -> &str {
        "MockMultimodal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multimodal::{ModelMessage, generate_avatar};

    #[tokio::test]
    async fn test_avatar_requests_use_resolver() {
        let model = MockMultimodalModel::new();

        let url = generate_avatar(&model, "professional woman with short brown hair")
            .await
            .unwrap();
        assert_eq!(url, "https://i.pravatar.cc/150?img=5");

        let url = generate_avatar(&model, "asian man with glasses, professional")
            .await
            .unwrap();
        assert_eq!(url, "https://i.pravatar.cc/150?img=7");
    }

    #[tokio::test]
    async fn test_other_requests_get_default() {
        let model = MockMultimodalModel::new();
        let request = ImageRequest {
            system: "You draw landscapes.".into(),
            messages: vec![ModelMessage::user("A woman on a mountain")],
        };

        let response = model.generate_image(&request).await.unwrap();
        assert_eq!(response.image_url, DEFAULT_AVATAR_URL);
    }

    #[tokio::test]
    async fn test_empty_request_gets_default() {
        let model = MockMultimodalModel::new();
        let request = ImageRequest {
            system: String::new(),
            messages: Vec::new(),
        };

        let response = model.generate_image(&request).await.unwrap();
        assert_eq!(response.image_url, DEFAULT_AVATAR_URL);
    }
}
