//! Conversational advice, translation and official resource links.

pub mod chat;
pub mod resources;
pub mod translate;

pub use chat::{ChatAdvisor, ChatContext, ChatReply, ChatRequest};
pub use resources::{official_resource_link, resource_footer};
pub use translate::{Translation, Translator};
