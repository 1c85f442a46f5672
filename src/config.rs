use crate::contact::DEFAULT_ENDPOINT;

/// Settings baked into the bundle at build time.
///
/// `CONTACT_ENDPOINT` overrides the mail endpoint, `CONTACT_TEST_MODE=1`
/// (or `true`) makes the contact form simulate sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub test_mode: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_ENDPOINT.to_string(),
            test_mode: false,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CONTACT_ENDPOINT"), option_env!("CONTACT_TEST_MODE"))
    }

    fn from_values(endpoint: Option<&str>, test_mode: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|s| !s.is_empty()) {
            config.contact_endpoint = endpoint.to_string();
        }
        config.test_mode = test_mode.is_some_and(parse_flag);
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Year the bundle was built, for the footer copyright line.
pub fn build_year() -> i32 {
    use chrono::{DateTime, Datelike, Utc};

    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_values(None, None);
        assert_eq!(config.contact_endpoint, DEFAULT_ENDPOINT);
        assert!(!config.test_mode);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_values(Some(" http://localhost:8080/mail "), Some("TRUE"));
        assert_eq!(config.contact_endpoint, "http://localhost:8080/mail");
        assert!(config.test_mode);

        let config = SiteConfig::from_values(Some(""), Some("0"));
        assert_eq!(config.contact_endpoint, DEFAULT_ENDPOINT);
        assert!(!config.test_mode);
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }
}
