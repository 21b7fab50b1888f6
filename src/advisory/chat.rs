//! Conversational advisor with regional and bio-scan context.

use serde::{Deserialize, Serialize};

use super::resources::{official_resource_link, resource_footer};
use crate::agronomy::regional_knowledge;
use crate::collaborators::{ChatMessage, ChatRole, CollaboratorError};
use crate::pipeline::SharedTextClient;
use crate::protocol::SegmentProtocol;

const CHAT_TEMPERATURE: f32 = 0.2;

/// History turns forwarded to the generator.
const HISTORY_TURNS: usize = 4;

/// Characters kept from each forwarded history turn.
const HISTORY_TURN_CHARS: usize = 1000;

/// `chat_focus` value that switches to disease-identification instructions.
pub const BIO_SCAN_FOCUS: &str = "Bio-Scan";

pub const MISSING_KEY_ANSWER: &str = "Error: API_KEY_MISSING";

fn default_language() -> String {
    "English".to_string()
}

/// Context sent alongside a chat message. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatContext {
    /// Loosely shaped turns; entries without a valid role and content are dropped.
    pub history: Vec<serde_json::Value>,
    pub chat_focus: Option<String>,
    pub place: Option<String>,
    pub location_intel: Option<String>,
    pub bio_audit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, alias = "context_data")]
    pub context: ChatContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    pub speech_summary: String,
}

/// Keep the last turns that carry a recognised role and some content.
fn clean_history(history: &[serde_json::Value]) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(HISTORY_TURNS);
    history[start..]
        .iter()
        .filter_map(|turn| {
            let role: ChatRole = serde_json::from_value(turn.get("role")?.clone()).ok()?;
            let content = match turn.get("content")? {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some(ChatMessage {
                role,
                content: content.chars().take(HISTORY_TURN_CHARS).collect(),
            })
        })
        .collect()
}

pub struct ChatAdvisor {
    client: Option<SharedTextClient>,
    protocol: SegmentProtocol,
}

impl ChatAdvisor {
    pub fn new(client: Option<SharedTextClient>) -> Self {
        Self {
            client,
            protocol: SegmentProtocol::advisory(),
        }
    }

    /// System prompt: persona, output language, format, regional truth, focus.
    pub fn system_prompt(&self, request: &ChatRequest) -> String {
        let language = &request.language;
        let mut prompt = format!(
            "Role: Master Agri-Industrial Intelligence (ICAR Certified). \
             OUTPUT LANGUAGE: {language}. \
             STRICT INSTRUCTION: Respond ONLY in {language}. \
             If the language is NOT English, follow this format: {} \
             Otherwise, just provide the full answer. ",
            self.protocol.format_instruction(
                &format!("Your full answer in {language}"),
                &format!("1-sentence voice summary in {language}"),
            ),
        );

        if let Some(place) = request.context.place.as_deref() {
            if let Some(truth) = regional_knowledge(place) {
                prompt.push_str(&format!(
                    "CURRENT CONTEXTUAL TRUTH for {}: {truth}. ",
                    place.trim().to_lowercase()
                ));
            }
        }

        if request.context.chat_focus.as_deref() == Some(BIO_SCAN_FOCUS) {
            prompt.push_str(
                "Instruction: You are in BIO-SCAN mode. Identify diseases and treatments. \
                 Answer any agricultural questions with 100% accuracy.",
            );
        } else {
            prompt.push_str(
                "Instruction: You are an Agricultural Intelligence Expert. Answer any regional \
                 or global crop questions with ICAR-level accuracy. Provide intelligence for any \
                 location requested.",
            );
        }
        prompt
    }

    /// Full conversation: system prompt, trimmed history, then the query.
    pub fn build_messages(&self, request: &ChatRequest) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(self.system_prompt(request))];
        messages.extend(clean_history(&request.context.history));

        let mut intel = String::new();
        if let Some(location) = request.context.location_intel.as_deref().filter(|s| !s.is_empty()) {
            intel.push_str(&format!("\nOFFICIAL LOCATION INTELLIGENCE: {location}"));
        }
        if let Some(audit) = request.context.bio_audit.as_deref().filter(|s| !s.is_empty()) {
            intel.push_str(&format!("\nOFFICIAL BIO-SCAN DIAGNOSIS: {audit}"));
        }
        messages.push(ChatMessage::user(format!(
            "CONTEXT: {intel}\nQUERY: {}",
            request.message
        )));
        messages
    }

    /// Answer a chat message. Never fails; errors become offline replies.
    pub fn reply(&self, request: &ChatRequest) -> ChatReply {
        let Some(client) = &self.client else {
            return ChatReply {
                answer: MISSING_KEY_ANSWER.to_string(),
                speech_summary: MISSING_KEY_ANSWER.to_string(),
            };
        };

        let messages = self.build_messages(request);
        match client.complete(&messages, Some(CHAT_TEMPERATURE)) {
            Ok(raw) => {
                let segments = self.protocol.split(&raw);
                let link = official_resource_link(&request.message);
                ChatReply {
                    answer: format!(
                        "{}{}",
                        segments.answer,
                        resource_footer(
                            "OFFICIAL SOURCE",
                            "Industrial Agriculture Research",
                            &link
                        )
                    ),
                    speech_summary: segments.summary,
                }
            }
            Err(CollaboratorError::Status { status, .. }) => {
                tracing::warn!(status, "Chat generation returned an error status");
                ChatReply {
                    answer: format!("OFFLINE: API Error {status}."),
                    speech_summary: "Link failure.".to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Chat generation failed");
                ChatReply {
                    answer: format!("OFFLINE: {e}"),
                    speech_summary: "Connection fault.".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{FailingClient, MockTextClient, TextClient};
    use serde_json::json;
    use std::sync::Arc;

    fn request(json: serde_json::Value) -> ChatRequest {
        serde_json::from_value(json).unwrap()
    }

    struct StatusClient;

    impl TextClient for StatusClient {
        fn complete(&self, _: &[ChatMessage], _: Option<f32>) -> Result<String, CollaboratorError> {
            Err(CollaboratorError::Status {
                status: 429,
                body: "rate limited".into(),
            })
        }
    }

    #[test]
    fn request_accepts_context_data_alias() {
        let req = request(json!({
            "message": "What to plant?",
            "context_data": {"place": "Nellore", "chat_focus": "Localization", "extra": 1}
        }));
        assert_eq!(req.language, "English");
        assert_eq!(req.context.place.as_deref(), Some("Nellore"));
    }

    #[test]
    fn system_prompt_includes_regional_truth() {
        let advisor = ChatAdvisor::new(None);
        let req = request(json!({"message": "hi", "language": "Telugu",
            "context": {"place": " Nellore "}}));
        let prompt = advisor.system_prompt(&req);
        assert!(prompt.contains("OUTPUT LANGUAGE: Telugu"));
        assert!(prompt.contains("CURRENT CONTEXTUAL TRUTH for nellore: Famous as"));
        assert!(prompt.contains("Agricultural Intelligence Expert"));
    }

    #[test]
    fn bio_scan_focus_switches_instructions() {
        let advisor = ChatAdvisor::new(None);
        let req = request(json!({"message": "hi", "context": {"chat_focus": "Bio-Scan"}}));
        assert!(advisor.system_prompt(&req).contains("BIO-SCAN mode"));
    }

    #[test]
    fn history_is_trimmed_and_filtered() {
        let long = "x".repeat(1500);
        let req = request(json!({
            "message": "next?",
            "context": {
                "history": [
                    {"role": "user", "content": "dropped by window"},
                    {"role": "user", "content": "one"},
                    {"role": "wizard", "content": "bad role"},
                    {"role": "assistant", "content": long},
                    {"content": "no role"}
                ],
                "location_intel": "Black soil belt",
                "bio_audit": "PADDY | BLAST"
            }
        }));
        let messages = ChatAdvisor::new(None).build_messages(&req);
        // system + 2 valid history turns + query
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].content, "one");
        assert_eq!(messages[2].role, ChatRole::Assistant);
        assert_eq!(messages[2].content.chars().count(), HISTORY_TURN_CHARS);
        let query = &messages[3].content;
        assert!(query.contains("OFFICIAL LOCATION INTELLIGENCE: Black soil belt"));
        assert!(query.contains("OFFICIAL BIO-SCAN DIAGNOSIS: PADDY | BLAST"));
        assert!(query.ends_with("QUERY: next?"));
    }

    #[test]
    fn reply_splits_and_links() {
        let mock = Arc::new(MockTextClient::new("TRANSLATION: Plant paddy. SUMMARY: Paddy."));
        let advisor = ChatAdvisor::new(Some(mock.clone()));
        let reply = advisor.reply(&request(json!({"message": "best crop", "language": "Telugu"})));
        assert!(reply.answer.starts_with("Plant paddy."));
        assert!(reply.answer.contains("q=best+crop+site%3Aicar.org.in"));
        assert_eq!(reply.speech_summary, "Paddy.");
        assert_eq!(mock.last_temperature(), Some(CHAT_TEMPERATURE));
    }

    #[test]
    fn missing_client_reports_missing_key() {
        let reply = ChatAdvisor::new(None).reply(&request(json!({"message": "hi"})));
        assert_eq!(reply.answer, MISSING_KEY_ANSWER);
    }

    #[test]
    fn failures_degrade_to_offline_text() {
        let reply = ChatAdvisor::new(Some(Arc::new(FailingClient)))
            .reply(&request(json!({"message": "hi"})));
        assert!(reply.answer.starts_with("OFFLINE: "));
        assert_eq!(reply.speech_summary, "Connection fault.");

        let reply = ChatAdvisor::new(Some(Arc::new(StatusClient)))
            .reply(&request(json!({"message": "hi"})));
        assert_eq!(reply.answer, "OFFLINE: API Error 429.");
        assert_eq!(reply.speech_summary, "Link failure.");
    }
}
