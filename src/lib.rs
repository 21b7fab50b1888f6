pub mod advisory; // Chat advisor, translation, official resource links
pub mod agronomy; // Crop suitability and regional intelligence
pub mod api; // axum HTTP surface
pub mod collaborators; // Vision + text generation clients
pub mod config;
pub mod knowledge; // Treatment catalog + name resolution
pub mod pipeline; // Diagnosis resolution
pub mod protocol; // Marker extraction + two-segment splitting
pub mod session; // Last diagnosis + simulation parameters

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::advisory::{ChatAdvisor, Translator};
use crate::api::ApiContext;
use crate::collaborators::ChatCompletionsClient;
use crate::config::{CollaboratorConfig, ServiceConfig};
use crate::pipeline::DiagnosisPipeline;

/// Build one collaborator client, or `None` when it cannot be configured.
fn connect(
    role: &str,
    config: &CollaboratorConfig,
    timeout_secs: u64,
) -> Option<Arc<ChatCompletionsClient>> {
    match ChatCompletionsClient::new(config, timeout_secs) {
        Ok(client) => {
            tracing::info!(role, model = client.model(), timeout_secs, "Collaborator configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(role, error = %e, "Collaborator unavailable, running offline");
            None
        }
    }
}

/// Wire collaborators into the shared API context.
///
/// Blocking HTTP clients are created here, outside any async runtime.
pub fn build_context(config: &ServiceConfig) -> ApiContext {
    let vision = connect("vision", &config.vision, config::VISION_TIMEOUT_SECS);
    let advisory = connect("advisory", &config.text, config::ADVISORY_TIMEOUT_SECS);
    let chat = connect("chat", &config.text, config::CHAT_TIMEOUT_SECS);
    let translation = connect("translation", &config.text, config::TRANSLATION_TIMEOUT_SECS);

    ApiContext::new(
        DiagnosisPipeline::new(
            vision.map(|c| c as pipeline::SharedVisionClient),
            advisory.map(|c| c as pipeline::SharedTextClient),
        ),
        ChatAdvisor::new(chat.map(|c| c as pipeline::SharedTextClient)),
        Translator::new(translation.map(|c| c as pipeline::SharedTextClient)),
    )
}

/// Binary entry point: load `.env`, initialize tracing, serve until Ctrl-C.
pub fn run() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let service = ServiceConfig::from_env();
    let ctx = build_context(&service);
    // Blocking clients must be dropped outside the runtime.
    let held = ctx.clone();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let served = runtime.block_on(api::serve(service.bind_addr, ctx));
    drop(runtime);
    drop(held);
    served
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_build_an_offline_context() {
        let config = ServiceConfig::from_lookup(|_| None);
        let ctx = build_context(&config);
        let reply = ctx.chat.reply(&serde_json::from_str(r#"{"message": "hi"}"#).unwrap());
        assert_eq!(reply.answer, advisory::chat::MISSING_KEY_ANSWER);
        assert_eq!(ctx.pipeline.knowledge().len(), 19);
    }
}
