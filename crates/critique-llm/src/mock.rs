use async_trait::async_trait;
use parking_lot::Mutex;

use critique_core::ModelError;

use crate::model::{GenerateRequest, VisionModel};

/// Pre-programmed responses for deterministic testing without API calls.
/// Responses are consumed in call order; every received request is logged so
/// tests can assert preamble binding and image counts.
#[derive(Debug)]
pub struct MockModel {
    responses: Mutex<Vec<Result<String, ModelError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockModel {
    pub fn new(mut responses: Vec<Result<String, ModelError>>) -> Self {
        // Stored reversed so each call can pop the next response off the end.
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl VisionModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, ModelError> {
        self.requests.lock().push(request.clone());

        match self.responses.lock().pop() {
            Some(response) => response,
            None => Err(ModelError::InvalidRequest(format!(
                "MockModel: no response configured for call {}",
                self.call_count()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            system: vec!["preamble".to_string()],
            prompt: prompt.to_string(),
            images: vec![],
        }
    }

    #[tokio::test]
    async fn sequential_responses_in_order() {
        let mock = MockModel::new(vec![Ok("first".to_string()), Ok("second".to_string())]);

        assert_eq!(mock.generate(&request("a")).await.unwrap(), "first");
        assert_eq!(mock.generate(&request("b")).await.unwrap(), "second");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn error_response_returned() {
        let mock = MockModel::new(vec![Err(ModelError::ProviderOverloaded)]);
        let err = mock.generate(&request("a")).await.unwrap_err();
        assert!(matches!(err, ModelError::ProviderOverloaded));
    }

    #[tokio::test]
    async fn exhausted_responses_error() {
        let mock = MockModel::new(vec![Ok("only one".to_string())]);
        let _ = mock.generate(&request("a")).await;
        let err = mock.generate(&request("b")).await.unwrap_err();
        assert!(matches!(err, ModelError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn request_log_captures_prompts() {
        let mock = MockModel::new(vec![Ok("x".to_string())]);
        mock.generate(&request("what the test sent")).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "what the test sent");
        assert_eq!(requests[0].system, vec!["preamble".to_string()]);
    }

    #[test]
    fn mock_properties() {
        let mock = MockModel::new(vec![]);
        assert_eq!(mock.name(), "mock");
        assert_eq!(mock.model(), "mock-model");
        assert_eq!(mock.call_count(), 0);
    }
}
