use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// BCP-47-style recognition language tag (`xx` or `xx-YY`).
///
/// Parsing only splits on `-`; the platform engine is the authority on
/// whether a tag is actually usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag {
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for LanguageTag {
    /// Platform default when no locale has been configured.
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = tag.split('-').collect();
        match parts.as_slice() {
            [language] if !language.is_empty() => Ok(Self {
                language: language.to_string(),
                region: None,
            }),
            [language, region] if !language.is_empty() && !region.is_empty() => Ok(Self {
                language: language.to_string(),
                region: Some(region.to_string()),
            }),
            _ => Err(Error::Language(format!("malformed language tag: {tag:?}"))),
        }
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = Error;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Static fallback list used when the platform offers no authoritative
/// enumeration of recognition languages.
pub const FALLBACK_LANGUAGES: [&str; 14] = [
    "en-US", "en-GB", "fr-FR", "de-DE", "it-IT", "es-ES", "ja-JP", "ko-KR", "zh-CN", "ru-RU",
    "pt-BR", "nl-NL", "hi-IN", "ar-SA",
];

/// Languages the recognition service can be asked for.
pub fn supported_languages() -> Vec<String> {
    FALLBACK_LANGUAGES.iter().map(|s| s.to_string()).collect()
}
