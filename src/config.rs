use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Agri-Command";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the advisory API.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8002";

/// Vision collaborator (image → free-text analysis).
pub const DEFAULT_VISION_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_VISION_MODEL: &str = "Qwen/Qwen2.5-VL-7B-Instruct";

/// Text collaborator (advisory, chat, translation).
pub const DEFAULT_TEXT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TEXT_MODEL: &str = "llama-3.1-8b-instant";

/// Per-call timeouts. A call that exceeds its budget degrades to a local
/// fallback string; there is no retry.
pub const VISION_TIMEOUT_SECS: u64 = 60;
pub const ADVISORY_TIMEOUT_SECS: u64 = 20;
pub const CHAT_TIMEOUT_SECS: u64 = 30;
pub const TRANSLATION_TIMEOUT_SECS: u64 = 15;

/// Request body limit for image diagnosis: a 20 MB photo after base64
/// expansion, plus JSON overhead.
pub const MAX_IMAGE_BODY_BYTES: usize = 28 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "agri_command=info,tower_http=info"
}

/// Endpoint + credentials for one OpenAI-compatible collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorConfig {
    pub base_url: String,
    pub model: String,
    /// `None` when the key is not configured; calls then degrade offline.
    pub api_key: Option<String>,
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub vision: CollaboratorConfig,
    pub text: CollaboratorConfig,
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset. An unparseable bind address falls back
    /// to [`DEFAULT_BIND_ADDR`] with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = match get("AGRI_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Invalid AGRI_BIND_ADDR, using default");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        Self {
            bind_addr,
            vision: CollaboratorConfig {
                base_url: get("AGRI_VISION_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_VISION_BASE_URL.to_string()),
                model: get("AGRI_VISION_MODEL")
                    .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
                api_key: get("HUGGING_FACE_API_KEY"),
            },
            text: CollaboratorConfig {
                base_url: get("AGRI_TEXT_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TEXT_BASE_URL.to_string()),
                model: get("AGRI_TEXT_MODEL").unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
                api_key: get("GROQ_API_KEY"),
            },
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8002))
}
