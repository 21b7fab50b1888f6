use serde::{Deserialize, Serialize};

use super::types::{ChatMessage, TextClient, VisionClient};
use super::CollaboratorError;
use crate::config::CollaboratorConfig;

/// Output budget for image descriptions.
const VISION_MAX_TOKENS: u32 = 500;

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// One instance per call type so each keeps its own timeout.
pub struct ChatCompletionsClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ChatCompletionsClient {
    /// Fails with [`CollaboratorError::MissingApiKey`] when no key is configured.
    pub fn new(config: &CollaboratorConfig, timeout_secs: u64) -> Result<Self, CollaboratorError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| CollaboratorError::MissingApiKey(config.base_url.clone()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CollaboratorError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
            timeout_secs,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn post<B: Serialize>(&self, body: &B) -> Result<String, CollaboratorError> {
        let url = format!("{}/chat/completions", self.base_url);
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    CollaboratorError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    CollaboratorError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    CollaboratorError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CollaboratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| CollaboratorError::ResponseParsing(e.to_string()))?;

        tracing::debug!(
            model = %self.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Completion received"
        );
        parsed.into_content()
    }
}

/// Request body for text completions.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Request body for image descriptions (multi-part user content).
#[derive(Serialize)]
struct VisionRequest<'a> {
    model: &'a str,
    messages: [VisionMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Serialize)]
struct VisionMessage<'a> {
    role: &'static str,
    content: [VisionPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum VisionPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    fn into_content(self) -> Result<String, CollaboratorError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CollaboratorError::ResponseParsing("no message content".into()))
    }
}

impl TextClient for ChatCompletionsClient {
    fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: Option<f32>,
    ) -> Result<String, CollaboratorError> {
        self.post(&CompletionRequest {
            model: &self.model,
            messages,
            temperature,
        })
    }
}

impl VisionClient for ChatCompletionsClient {
    fn describe_image(
        &self,
        prompt: &str,
        image_base64: &str,
    ) -> Result<String, CollaboratorError> {
        self.post(&VisionRequest {
            model: &self.model,
            messages: [VisionMessage {
                role: "user",
                content: [
                    VisionPart::Text { text: prompt },
                    VisionPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{image_base64}"),
                        },
                    },
                ],
            }],
            max_tokens: VISION_MAX_TOKENS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> CollaboratorConfig {
        CollaboratorConfig {
            base_url: "http://127.0.0.1:1/v1/".into(),
            model: "test-model".into(),
            api_key: key.map(str::to_string),
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = ChatCompletionsClient::new(&config(None), 5).err().unwrap();
        assert!(matches!(err, CollaboratorError::MissingApiKey(_)));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = ChatCompletionsClient::new(&config(Some("k")), 5).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:1/v1");
        assert_eq!(client.model(), "test-model");
    }

    #[test]
    fn unreachable_endpoint_is_an_error_not_a_panic() {
        let client = ChatCompletionsClient::new(&config(Some("k")), 5).unwrap();
        let result = client.complete(&[ChatMessage::user("hi")], Some(0.2));
        assert!(result.is_err());
    }

    #[test]
    fn vision_request_shape() {
        let request = VisionRequest {
            model: "m",
            messages: [VisionMessage {
                role: "user",
                content: [
                    VisionPart::Text { text: "describe" },
                    VisionPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,AAAA".into(),
                        },
                    },
                ],
            }],
            max_tokens: VISION_MAX_TOKENS,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 500);
        let content = &json["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(
            content[1]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[test]
    fn text_request_omits_missing_temperature() {
        let messages = [ChatMessage::user("hi")];
        let json = serde_json::to_value(CompletionRequest {
            model: "m",
            messages: &messages,
            temperature: None,
        })
        .unwrap();
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_content_extracted() {
        let parsed: CompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"TRANSLATION: a SUMMARY: b"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_content().unwrap(), "TRANSLATION: a SUMMARY: b");

        let empty: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            empty.into_content(),
            Err(CollaboratorError::ResponseParsing(_))
        ));
    }
}
