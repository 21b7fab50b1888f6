use serde::Serialize;

use crate::collaborators::ChatMessage;
use crate::pipeline::SharedTextClient;
use crate::protocol::SegmentProtocol;

const TRANSLATION_TEMPERATURE: f32 = 0.1;

/// Language for which no translation call is made.
pub const SOURCE_LANGUAGE: &str = "English";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub translation: String,
    pub summary: String,
}

impl Translation {
    fn passthrough(text: &str) -> Self {
        Self {
            translation: text.to_string(),
            summary: text.to_string(),
        }
    }
}

/// Translates advisory text and produces a spoken summary.
pub struct Translator {
    client: Option<SharedTextClient>,
    protocol: SegmentProtocol,
}

impl Translator {
    pub fn new(client: Option<SharedTextClient>) -> Self {
        Self {
            client,
            protocol: SegmentProtocol::translation(),
        }
    }

    /// Translate `text` into `language`.
    ///
    /// English input, a missing client or a failed call all return the
    /// text unchanged as both translation and summary.
    pub fn translate(&self, text: &str, language: &str) -> Translation {
        if language.trim().eq_ignore_ascii_case(SOURCE_LANGUAGE) {
            return Translation::passthrough(text);
        }
        let Some(client) = &self.client else {
            return Translation::passthrough(text);
        };

        let system = format!(
            "You are a professional agricultural translator. Translate the input into {language}. \
             Also provide a 1-sentence voice-optimized summary in {language}. {}.",
            self.protocol.format_instruction("translation", "summary"),
        );
        let messages = [ChatMessage::system(system), ChatMessage::user(text)];

        match client.complete(&messages, Some(TRANSLATION_TEMPERATURE)) {
            Ok(raw) => {
                let segments = self.protocol.split(&raw);
                Translation {
                    translation: segments.answer,
                    summary: segments.summary,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, language, "Translation failed, returning source text");
                Translation::passthrough(text)
            }
        }
    }
}
