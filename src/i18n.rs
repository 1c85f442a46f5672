use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the visitor's language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct LanguageParseError(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::De,
            Self::De => Self::En,
        }
    }

    /// Picks the variant of a bilingual pair matching this language.
    pub fn pick<T>(self, en: T, de: T) -> T {
        match self {
            Self::En => en,
            Self::De => de,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

/// Warning logged when the stored preference cannot be read or written.
pub fn storage_warning(err: &impl fmt::Debug) -> String {
    format!(
        "language preference storage failed ({err:?}), using {}",
        Language::default()
    )
}

/// A static text available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub de: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, de: &'static str) -> Self {
        Self { en, de }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        lang.pick(self.en, self.de)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_language() {
        for lang in [Language::En, Language::De] {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn test_stored_code_follows_last_toggle() {
        let mut lang = Language::default();
        let mut writes = Vec::new();
        for _ in 0..5 {
            lang = lang.toggled();
            writes.push(lang.to_string());
        }
        let stored = writes.last().expect("toggled at least once");
        assert_eq!(stored, "de");
        assert_eq!(stored.parse::<Language>(), Ok(lang));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert!("fr".parse::<Language>().is_err());
        assert!("EN".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_storage_warning_names_cause_and_fallback() {
        let err = "fr".parse::<Language>().unwrap_err();
        let warning = storage_warning(&err);
        assert!(warning.contains("\"fr\""), "{warning}");
        assert!(warning.ends_with("using en"), "{warning}");
    }

    #[test]
    fn test_localized_pick() {
        let text = Localized::new("Hello", "Hallo");
        assert_eq!(text.get(Language::En), "Hello");
        assert_eq!(text.get(Language::De), "Hallo");
        assert_eq!(Language::De.pick(1, 2), 2);
    }
}
