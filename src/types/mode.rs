//! Generation modes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Presentation style requested from the backend.
///
/// Tags match the ones the settings UI stores (`encyclopedia`, `eli5`,
/// `practicalExamples`, ...). Deserializing an unknown tag yields
/// [`GenerationMode::Encyclopedia`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum GenerationMode {
    #[default]
    #[strum(serialize = "encyclopedia")]
    Encyclopedia,
    #[strum(serialize = "eli5")]
    Eli5,
    #[strum(serialize = "practicalExamples")]
    PracticalExamples,
    #[strum(serialize = "stepByStep")]
    StepByStep,
    #[strum(serialize = "summary")]
    Summary,
    #[strum(serialize = "funFacts")]
    FunFacts,
}

impl GenerationMode {
    /// Every mode, in the order the settings dialog lists them.
    pub const ALL: [GenerationMode; 6] = [
        Self::Encyclopedia,
        Self::Eli5,
        Self::PracticalExamples,
        Self::StepByStep,
        Self::Summary,
        Self::FunFacts,
    ];

    /// Lenient parse: unknown or empty tags fall back to [`GenerationMode::Encyclopedia`].
    pub fn from_tag(tag: &str) -> Self {
        tag.trim().parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encyclopedia => "encyclopedia",
            Self::Eli5 => "eli5",
            Self::PracticalExamples => "practicalExamples",
            Self::StepByStep => "stepByStep",
            Self::Summary => "summary",
            Self::FunFacts => "funFacts",
        }
    }
}

impl From<String> for GenerationMode {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}
