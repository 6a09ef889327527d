//! Supported response languages.

use serde::{Deserialize, Serialize};

/// Languages a suggestion can be requested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Hindi.
    #[serde(rename = "hi")]
    Hi,
    /// Punjabi.
    #[serde(rename = "pa")]
    Pa,
}

impl Language {
    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Pa => "pa",
        }
    }

    /// Parse a two-letter language code. Unknown codes return `None`;
    /// callers that want the original fallback behavior default to
    /// English.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "pa" => Some(Language::Pa),
            _ => None,
        }
    }

    /// Native display name, as shown in a language selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी (Hindi)",
            Language::Pa => "ਪੰਜਾਬੀ (Punjabi)",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in [Language::En, Language::Hi, Language::Pa] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        let parsed: Language = serde_json::from_str("\"pa\"").unwrap();
        assert_eq!(parsed, Language::Pa);
    }
}
