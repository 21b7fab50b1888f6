//! Diagnosis resolution: vision analysis → catalog record → localized advisory.

pub mod findings;
pub mod orchestrator;
pub mod prompt;
pub mod synthesis;
pub mod types;

pub use findings::*;
pub use orchestrator::*;
pub use prompt::*;
pub use synthesis::*;
pub use types::*;
