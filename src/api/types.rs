//! Shared API state.

use std::sync::Arc;

use crate::advisory::{ChatAdvisor, Translator};
use crate::pipeline::DiagnosisPipeline;
use crate::session::SessionContext;

/// Shared state handed to every handler through axum `State`.
#[derive(Clone)]
pub struct ApiContext {
    pub pipeline: Arc<DiagnosisPipeline>,
    pub chat: Arc<ChatAdvisor>,
    pub translator: Arc<Translator>,
    pub session: Arc<SessionContext>,
}

impl ApiContext {
    pub fn new(pipeline: DiagnosisPipeline, chat: ChatAdvisor, translator: Translator) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            chat: Arc::new(chat),
            translator: Arc::new(translator),
            session: Arc::new(SessionContext::new()),
        }
    }

    /// Context with no collaborators; every generated text degrades locally.
    pub fn offline() -> Self {
        Self::new(
            DiagnosisPipeline::offline(),
            ChatAdvisor::new(None),
            Translator::new(None),
        )
    }
}
