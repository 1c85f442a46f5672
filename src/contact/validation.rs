use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::Language;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern should compile")
});

/// The first check an address failed. Checks run in declaration order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is empty")]
    Required,
    #[error("email has no @")]
    MissingAt,
    #[error("email has more than one @")]
    TooManyAt,
    #[error("email has no local part")]
    MissingLocalPart,
    #[error("email has no domain")]
    MissingDomain,
    #[error("email domain has no dot")]
    MissingDot,
    #[error("email domain is incomplete")]
    IncompleteDomain,
    #[error("email domain extension is too short")]
    ExtensionTooShort,
    #[error("email contains spaces")]
    ContainsSpaces,
    #[error("email contains consecutive dots")]
    ConsecutiveDots,
    #[error("email does not match name@domain.tld")]
    InvalidFormat,
}

impl EmailError {
    pub fn message(self, lang: Language) -> &'static str {
        match self {
            Self::Required => lang.pick(
                "Email address is required.",
                "E-Mail-Adresse ist erforderlich.",
            ),
            Self::MissingAt => lang.pick(
                "Email address must contain @ symbol.",
                "E-Mail-Adresse muss @ Symbol enthalten.",
            ),
            Self::TooManyAt => lang.pick(
                "Email address contains too many @ symbols.",
                "E-Mail-Adresse enthält zu viele @ Symbole.",
            ),
            Self::MissingLocalPart => lang.pick(
                "Email address is missing the part before @.",
                "E-Mail-Adresse fehlt der Teil vor @.",
            ),
            Self::MissingDomain => lang.pick(
                "Email address is missing the domain after @.",
                "E-Mail-Adresse fehlt die Domain nach @.",
            ),
            Self::MissingDot => lang.pick(
                "Email domain must contain a dot (e.g., .com, .de).",
                "E-Mail-Domain muss einen Punkt enthalten (z.B. .com, .de).",
            ),
            Self::IncompleteDomain => {
                lang.pick("Email domain is incomplete.", "E-Mail-Domain ist unvollständig.")
            }
            Self::ExtensionTooShort => lang.pick(
                "Email domain extension is too short (minimum 2 characters).",
                "E-Mail-Domain-Endung ist zu kurz (mindestens 2 Zeichen).",
            ),
            Self::ContainsSpaces => lang.pick(
                "Email address cannot contain spaces.",
                "E-Mail-Adresse darf keine Leerzeichen enthalten.",
            ),
            Self::ConsecutiveDots => lang.pick(
                "Email address cannot contain consecutive dots.",
                "E-Mail-Adresse darf keine aufeinanderfolgenden Punkte enthalten.",
            ),
            Self::InvalidFormat => lang.pick(
                "Email address format is invalid. Please use format: name@domain.com",
                "E-Mail-Adressformat ist ungültig. Bitte verwenden Sie das Format: name@domain.de",
            ),
        }
    }
}

/// Validates an address, reporting only the first failing check.
pub fn validate_email(raw: &str) -> Result<(), EmailError> {
    let email = raw.trim();
    check_present(email)?;
    check_at_symbol(email)?;
    check_parts(email)?;
    check_format(email)?;
    check_pattern(email)
}

fn check_present(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    Ok(())
}

fn check_at_symbol(email: &str) -> Result<(), EmailError> {
    match email.matches('@').count() {
        0 => Err(EmailError::MissingAt),
        1 => Ok(()),
        _ => Err(EmailError::TooManyAt),
    }
}

fn check_parts(email: &str) -> Result<(), EmailError> {
    let (local, domain) = email.split_once('@').ok_or(EmailError::MissingAt)?;
    if local.is_empty() {
        return Err(EmailError::MissingLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailError::MissingDomain);
    }
    check_domain(domain)
}

fn check_domain(domain: &str) -> Result<(), EmailError> {
    let (_, extension) = domain.rsplit_once('.').ok_or(EmailError::MissingDot)?;
    // empty labels count, so `.com` and `..com` reach the format checks
    if domain.split('.').count() < 2 {
        return Err(EmailError::IncompleteDomain);
    }
    if extension.chars().count() < 2 {
        return Err(EmailError::ExtensionTooShort);
    }
    Ok(())
}

fn check_format(email: &str) -> Result<(), EmailError> {
    if email.contains(' ') {
        return Err(EmailError::ContainsSpaces);
    }
    if email.contains("..") {
        return Err(EmailError::ConsecutiveDots);
    }
    Ok(())
}

fn check_pattern(email: &str) -> Result<(), EmailError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(validate_email("john@example.com"), Ok(()));
        assert_eq!(validate_email("  jane.doe+news@mail.example.de "), Ok(()));
        assert_eq!(validate_email("a_b%c-d@sub-domain.example.org"), Ok(()));
    }

    #[test]
    fn test_documented_failures() {
        assert_eq!(validate_email("john@@example.com"), Err(EmailError::TooManyAt));
        assert_eq!(validate_email("john@example"), Err(EmailError::MissingDot));
        assert_eq!(
            validate_email("john@example.c"),
            Err(EmailError::ExtensionTooShort)
        );
    }

    #[test]
    fn test_missing_at_reported_alone() {
        for input in ["john", "john.example.com", "a b c", "..", "x.y"] {
            assert_eq!(validate_email(input), Err(EmailError::MissingAt), "{input}");
        }
    }

    #[test]
    fn test_too_many_at_wins_over_domain_checks() {
        // each of these would also fail a later domain or format check
        for input in ["a@b@c", "@@", "a@b@example.com", "a@@", "a b@c@d"] {
            assert_eq!(validate_email(input), Err(EmailError::TooManyAt), "{input}");
        }
    }

    #[test]
    fn test_stage_order_decides_message() {
        assert_eq!(validate_email(""), Err(EmailError::Required));
        assert_eq!(validate_email("   "), Err(EmailError::Required));
        assert_eq!(validate_email("@example.com"), Err(EmailError::MissingLocalPart));
        assert_eq!(validate_email("john@"), Err(EmailError::MissingDomain));
        assert_eq!(validate_email("john@.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("john@..com"), Err(EmailError::ConsecutiveDots));
        assert_eq!(validate_email("john@example."), Err(EmailError::ExtensionTooShort));
        assert_eq!(validate_email("jo hn@example.com"), Err(EmailError::ContainsSpaces));
        // rejected by the pattern as well, but the dot check runs first
        assert_eq!(validate_email("a..b@x.com"), Err(EmailError::ConsecutiveDots));
        assert_eq!(validate_email("john@exa..mple.com"), Err(EmailError::ConsecutiveDots));
        assert_eq!(validate_email("jöhn@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("john@example.c0m"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_leading_dot_domains_reach_format_checks() {
        assert_eq!(validate_email("john@..com"), Err(EmailError::ConsecutiveDots));
        assert_eq!(validate_email("john@.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_messages_are_localized() {
        assert_eq!(
            EmailError::MissingAt.message(Language::En),
            "Email address must contain @ symbol."
        );
        assert_eq!(
            EmailError::MissingAt.message(Language::De),
            "E-Mail-Adresse muss @ Symbol enthalten."
        );
        assert_ne!(
            EmailError::InvalidFormat.message(Language::En),
            EmailError::InvalidFormat.message(Language::De)
        );
    }
}
