//! Lookup requests.

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::language::LanguageCode;
use super::mode::GenerationMode;

/// One user-initiated lookup. Immutable once built.
///
/// ```
/// use topiclens::types::{GenerationMode, GenerationRequest, LanguageCode};
///
/// let request = GenerationRequest::builder()
///     .topic("photosynthesis")
///     .language(LanguageCode::Fr)
///     .mode(GenerationMode::Eli5)
///     .build();
/// assert_eq!(request.topic(), "photosynthesis");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[builder(into)]
    topic: String,
    #[builder(default)]
    #[serde(default)]
    language: LanguageCode,
    #[builder(default)]
    #[serde(default)]
    mode: GenerationMode,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, language: LanguageCode, mode: GenerationMode) -> Self {
        Self {
            topic: topic.into(),
            language,
            mode,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Prompt sent to the backend for this request.
    pub fn prompt(&self) -> String {
        crate::prompt::build_prompt(&self.topic, &self.language, self.mode)
    }
}
