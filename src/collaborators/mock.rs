use std::sync::Mutex;

use super::types::{ChatMessage, TextClient, VisionClient};
use super::CollaboratorError;

/// Mock vision client for testing: returns a fixed analysis.
pub struct MockVisionClient {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl MockVisionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl VisionClient for MockVisionClient {
    fn describe_image(
        &self,
        prompt: &str,
        _image_base64: &str,
    ) -> Result<String, CollaboratorError> {
        if let Ok(mut guard) = self.prompts.lock() {
            guard.push(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}

/// Mock text client for testing: returns a fixed completion and records
/// every conversation it was sent.
pub struct MockTextClient {
    response: String,
    calls: Mutex<Vec<(Vec<ChatMessage>, Option<f32>)>>,
}

impl MockTextClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Messages of the most recent call.
    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.calls
            .lock()
            .ok()
            .and_then(|guard| guard.last().map(|(messages, _)| messages.clone()))
    }

    pub fn last_temperature(&self) -> Option<f32> {
        self.calls
            .lock()
            .ok()
            .and_then(|guard| guard.last().and_then(|(_, temperature)| *temperature))
    }
}

impl TextClient for MockTextClient {
    fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f32>,
    ) -> Result<String, CollaboratorError> {
        if let Ok(mut guard) = self.calls.lock() {
            guard.push((messages.to_vec(), temperature));
        }
        Ok(self.response.clone())
    }
}

/// Collaborator that is always unreachable.
pub struct FailingClient;

impl FailingClient {
    fn error() -> CollaboratorError {
        CollaboratorError::Connection("mock://offline".to_string())
    }
}

impl VisionClient for FailingClient {
    fn describe_image(&self, _: &str, _: &str) -> Result<String, CollaboratorError> {
        Err(Self::error())
    }
}

impl TextClient for FailingClient {
    fn complete(&self, _: &[ChatMessage], _: Option<f32>) -> Result<String, CollaboratorError> {
        Err(Self::error())
    }
}
