use async_trait::async_trait;

use critique_core::ModelError;

/// One base64-encoded image handed to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePart {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl ImagePart {
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data: data.into(),
        }
    }
}

/// A single non-streaming generation request: a fixed instruction preamble,
/// one prompt, and the images it refers to.
#[derive(Clone, Debug)]
pub struct GenerateRequest {
    /// Instruction preamble lines, sent as the system instruction.
    pub system: Vec<String>,
    pub prompt: String,
    pub images: Vec<ImagePart>,
}

/// The one capability this service needs from a provider: accept a text
/// prompt plus a list of image references, return text.
#[async_trait]
pub trait VisionModel: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;
    fn model(&self) -> &str;

    async fn generate(&self, request: &GenerateRequest) -> Result<String, ModelError>;
}
