use crate::i18n::{Language, Localized};

/// Viewports narrower than this get the short placeholder texts.
pub const SMALL_SCREEN_BREAKPOINT: f64 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

struct Texts {
    normal: Localized,
    error: Localized,
}

const FULL: [Texts; 3] = [
    Texts {
        normal: Localized::new("Your Name goes here", "Ihr Name hier eingeben"),
        error: Localized::new(
            "Oops! it seems your name is missing",
            "Hoppla! es scheint, als ob Ihr Name fehlt",
        ),
    },
    Texts {
        normal: Localized::new("yourmail@email.com", "deinemail@email.de"),
        error: Localized::new(
            "Hoppla! your email is required",
            "Hoppla! Ihre E-Mail ist erforderlich",
        ),
    },
    Texts {
        normal: Localized::new(
            "Hello Eugen, I am interested in...",
            "Hallo Eugen, ich interessiere mich für...",
        ),
        error: Localized::new("What do you need to develop?", "Was müssen Sie entwickeln?"),
    },
];

const SHORT: [Texts; 3] = [
    Texts {
        normal: Localized::new("Your Name", "Ihr Name"),
        error: Localized::new("Name missing", "Name fehlt"),
    },
    Texts {
        normal: Localized::new("mail@email.com", "mail@email.de"),
        error: Localized::new("Email required", "E-Mail erforderlich"),
    },
    Texts {
        normal: Localized::new(
            "Hello Eugen, I am interested...",
            "Hallo Eugen, ich interessiere...",
        ),
        error: Localized::new("What to develop?", "Was entwickeln?"),
    },
];

/// Placeholder text for a contact form field.
///
/// `viewport_width` is `None` while rendering on the server, which always
/// yields the full-length texts.
pub fn placeholder(
    field: Field,
    lang: Language,
    is_error: bool,
    viewport_width: Option<f64>,
) -> &'static str {
    let small = viewport_width.is_some_and(|w| w < SMALL_SCREEN_BREAKPOINT);
    let set = if small { &SHORT } else { &FULL };
    let texts = &set[field as usize];
    if is_error {
        texts.error.get(lang)
    } else {
        texts.normal.get(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_texts_on_wide_or_unknown_viewport() {
        assert_eq!(
            placeholder(Field::Name, Language::En, false, None),
            "Your Name goes here"
        );
        assert_eq!(
            placeholder(Field::Email, Language::De, true, Some(1280.0)),
            "Hoppla! Ihre E-Mail ist erforderlich"
        );
        assert_eq!(
            placeholder(Field::Message, Language::En, false, Some(420.0)),
            "Hello Eugen, I am interested in..."
        );
    }

    #[test]
    fn test_short_texts_below_breakpoint() {
        assert_eq!(
            placeholder(Field::Name, Language::De, true, Some(419.0)),
            "Name fehlt"
        );
        assert_eq!(
            placeholder(Field::Message, Language::En, true, Some(320.0)),
            "What to develop?"
        );
        assert_eq!(
            placeholder(Field::Email, Language::En, false, Some(360.0)),
            "mail@email.com"
        );
    }
}
