use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use critique_core::{ApiKey, ModelError};

use crate::model::{GenerateRequest, VisionModel};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Non-streaming Gemini `generateContent` client with API-key auth.
#[derive(Debug)]
pub struct GeminiModel {
    client: Client,
    api_key: ApiKey,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiModel {
    /// Rejects empty credentials up front so a misconfigured session fails
    /// before any network traffic.
    pub fn new(api_key: ApiKey, model: impl Into<String>) -> Result<Self, ModelError> {
        if api_key.0.expose_secret().trim().is_empty() {
            return Err(ModelError::AuthenticationFailed("empty API key".into()));
        }

        Ok(Self {
            client: Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait::async_trait]
impl VisionModel for GeminiModel {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model, images = request.images.len()))]
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ModelError> {
        let body = build_body(request);

        let resp = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.0.expose_secret())])
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout(self.timeout)
                } else {
                    ModelError::NetworkError(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ModelError::from_status(status, body));
        }

        let decoded: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        extract_text(decoded)
    }
}

fn build_body(request: &GenerateRequest) -> GenerateContentBody {
    let system_instruction = if request.system.is_empty() {
        None
    } else {
        Some(SystemInstruction {
            parts: request
                .system
                .iter()
                .map(|line| TextPart { text: line.clone() })
                .collect(),
        })
    };

    // Prompt text first, then the image parts, in upload order.
    let mut parts = vec![Part::Text {
        text: request.prompt.clone(),
    }];
    parts.extend(request.images.iter().map(|image| Part::InlineData {
        inline_data: InlineData {
            mime_type: image.mime_type.clone(),
            data: image.data.clone(),
        },
    }));

    GenerateContentBody {
        system_instruction,
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
        generation_config: Some(GenerationConfig {
            max_output_tokens: Some(DEFAULT_MAX_OUTPUT_TOKENS),
            temperature: None,
        }),
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, ModelError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ModelError::MalformedResponse("no candidates in response".into()))?;

    let content = candidate.content.ok_or_else(|| {
        ModelError::MalformedResponse(format!(
            "candidate has no content (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })?;

    let text: String = content
        .parts
        .iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            Part::InlineData { .. } => None,
        })
        .collect();

    if text.is_empty() {
        return Err(ModelError::MalformedResponse(
            "candidate contained no text parts".into(),
        ));
    }

    Ok(text)
}

// --- Wire types (camelCase per the Gemini REST API) ---

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SystemInstruction {
    parts: Vec<TextPart>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}
