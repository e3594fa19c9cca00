//! Response languages.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Short language code selecting the language of the generated text.
///
/// Codes outside the supported table are kept verbatim in
/// [`LanguageCode::Other`] and resolve to English.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LanguageCode {
    #[default]
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "es")]
    Es,
    #[strum(serialize = "fr")]
    Fr,
    #[strum(serialize = "de")]
    De,
    #[strum(serialize = "it")]
    It,
    #[strum(serialize = "pt")]
    Pt,
    #[strum(serialize = "nl")]
    Nl,
    #[strum(serialize = "pl")]
    Pl,
    #[strum(serialize = "ru")]
    Ru,
    #[strum(serialize = "ja")]
    Ja,
    #[strum(serialize = "zh")]
    Zh,
    #[strum(serialize = "ko")]
    Ko,
    #[strum(serialize = "ar")]
    Ar,
    #[strum(serialize = "hi")]
    Hi,
    #[strum(serialize = "tr")]
    Tr,
    /// Unsupported code.
    #[strum(default)]
    Other(String),
}

const FALLBACK_NAME: &str = "English";

impl LanguageCode {
    /// Supported codes, in display order.
    pub const SUPPORTED: [LanguageCode; 15] = [
        Self::En,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Pt,
        Self::Nl,
        Self::Pl,
        Self::Ru,
        Self::Ja,
        Self::Zh,
        Self::Ko,
        Self::Ar,
        Self::Hi,
        Self::Tr,
    ];

    /// Parse a code; never fails.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        match code.parse() {
            Ok(lang) => lang,
            Err(_) => Self::Other(code.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Ru => "ru",
            Self::Ja => "ja",
            Self::Zh => "zh",
            Self::Ko => "ko",
            Self::Ar => "ar",
            Self::Hi => "hi",
            Self::Tr => "tr",
            Self::Other(s) => s,
        }
    }

    /// Full language name interpolated into prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::It => "Italian",
            Self::Pt => "Portuguese",
            Self::Nl => "Dutch",
            Self::Pl => "Polish",
            Self::Ru => "Russian",
            Self::Ja => "Japanese",
            Self::Zh => "Chinese",
            Self::Ko => "Korean",
            Self::Ar => "Arabic",
            Self::Hi => "Hindi",
            Self::Tr => "Turkish",
            Self::Other(_) => FALLBACK_NAME,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.as_str().to_string()
    }
}
