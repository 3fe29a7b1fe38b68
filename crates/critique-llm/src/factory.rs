use std::sync::Arc;
use std::time::Duration;

use critique_core::{ApiKey, ModelError};

use crate::gemini::GeminiModel;
use crate::model::VisionModel;

/// Builds a model from a session credential. The credential is per-session
/// state, so the server constructs a fresh model for each run.
pub trait ModelFactory: Send + Sync {
    fn build(&self, api_key: &ApiKey) -> Result<Arc<dyn VisionModel>, ModelError>;
}

/// Production factory: one Gemini model per run, configured once at startup.
pub struct GeminiFactory {
    model: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl GeminiFactory {
    pub fn new(model: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            model: model.into(),
            base_url,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ModelFactory for GeminiFactory {
    fn build(&self, api_key: &ApiKey) -> Result<Arc<dyn VisionModel>, ModelError> {
        let mut model =
            GeminiModel::new(api_key.clone(), &self.model)?.with_timeout(self.timeout);
        if let Some(base_url) = &self.base_url {
            model = model.with_base_url(base_url);
        }
        Ok(Arc::new(model))
    }
}

/// Test factory: hands back the same model regardless of credential.
pub struct FixedFactory {
    model: Arc<dyn VisionModel>,
}

impl FixedFactory {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }
}

impl ModelFactory for FixedFactory {
    fn build(&self, _api_key: &ApiKey) -> Result<Arc<dyn VisionModel>, ModelError> {
        Ok(Arc::clone(&self.model))
    }
}
