use std::time::Duration;

use thiserror::Error;

use super::{validate_email, ContactData, EmailError, SendError};
use crate::i18n::Language;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("form has invalid or missing fields")]
    Invalid,
    #[error("privacy policy not accepted")]
    PolicyNotAccepted,
    #[error("message is empty")]
    EmptyMessage,
    #[error("name is empty")]
    EmptyName,
}

/// Why a submission never reached the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Form(#[from] FormError),
}

impl Rejection {
    pub fn banner(self) -> Banner {
        match self {
            Self::Email(_) => Banner::EmailInvalid,
            Self::Form(_) => Banner::FormInvalid,
        }
    }
}

/// A transient message shown below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    EmailInvalid,
    FormInvalid,
    Sent,
    SendFailed,
}

impl Banner {
    pub fn duration(self) -> Duration {
        let ms = match self {
            Self::EmailInvalid => 6000,
            Self::FormInvalid => 5000,
            Self::Sent => 5000,
            Self::SendFailed => 7000,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub sending: bool,
    pub sent: bool,
    pub send_error: Option<&'static str>,
    pub form_invalid: bool,
    pub email_error: Option<&'static str>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub data: ContactData,
    pub accept_policy: bool,
    pub feedback: Feedback,
}

impl ContactForm {
    pub fn toggle_policy(&mut self) {
        self.accept_policy = !self.accept_policy;
    }

    /// Runs the client-side checks and, when they pass, marks the form as
    /// sending and hands back the payload to transmit.
    ///
    /// `form_valid` is the browser's own constraint validation of the form.
    pub fn begin_submit(
        &mut self,
        form_valid: bool,
        lang: Language,
    ) -> Result<ContactData, Rejection> {
        self.feedback = Feedback::default();

        if let Err(err) = validate_email(&self.data.email) {
            self.feedback.email_error = Some(err.message(lang));
            return Err(err.into());
        }
        if let Err(err) = self.check_fields(form_valid) {
            log::debug!("contact form rejected: {err}");
            self.feedback.form_invalid = true;
            return Err(err.into());
        }

        self.feedback.sending = true;
        Ok(self.data.clone())
    }

    fn check_fields(&self, form_valid: bool) -> Result<(), FormError> {
        if !form_valid {
            return Err(FormError::Invalid);
        }
        if !self.accept_policy {
            return Err(FormError::PolicyNotAccepted);
        }
        if self.data.message.trim().is_empty() {
            return Err(FormError::EmptyMessage);
        }
        if self.data.name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(())
    }

    /// Applies the outcome of a send and returns the banner now showing.
    pub fn finish(&mut self, outcome: Result<(), SendError>, lang: Language) -> Banner {
        self.feedback.sending = false;
        match outcome {
            Ok(()) => {
                self.data = ContactData::default();
                self.accept_policy = false;
                self.feedback.sent = true;
                Banner::Sent
            }
            Err(err) => {
                log::warn!("contact form not sent: {err}");
                self.feedback.send_error = Some(err.message(lang));
                Banner::SendFailed
            }
        }
    }

    pub fn dismiss(&mut self, banner: Banner) {
        match banner {
            Banner::EmailInvalid => self.feedback.email_error = None,
            Banner::FormInvalid => self.feedback.form_invalid = false,
            Banner::Sent => self.feedback.sent = false,
            Banner::SendFailed => self.feedback.send_error = None,
        }
    }

    pub fn name_missing(&self) -> bool {
        self.feedback.form_invalid && self.data.name.trim().is_empty()
    }

    pub fn email_missing(&self) -> bool {
        self.feedback.email_error.is_some()
    }

    pub fn message_missing(&self) -> bool {
        self.feedback.form_invalid && self.data.message.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            data: ContactData {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                message: "Let's build an engine.".to_string(),
            },
            accept_policy: true,
            feedback: Feedback::default(),
        }
    }

    #[test]
    fn test_valid_form_starts_sending() {
        let mut form = filled();
        let payload = form.begin_submit(true, Language::En).unwrap();
        assert_eq!(payload, form.data);
        assert!(form.feedback.sending);
        assert!(!form.feedback.form_invalid);
        assert_eq!(form.feedback.email_error, None);
    }

    #[test]
    fn test_email_checked_before_form_fields() {
        let mut form = filled();
        form.data.email = "ada.example.com".to_string();
        form.data.name.clear();
        form.accept_policy = false;

        let err = form.begin_submit(false, Language::De).unwrap_err();
        assert_eq!(err, Rejection::Email(EmailError::MissingAt));
        assert_eq!(err.banner(), Banner::EmailInvalid);
        assert_eq!(
            form.feedback.email_error,
            Some("E-Mail-Adresse muss @ Symbol enthalten.")
        );
        assert!(!form.feedback.form_invalid);
        assert!(!form.feedback.sending);
    }

    #[test]
    fn test_form_preconditions_in_order() {
        let mut form = filled();
        assert_eq!(
            form.begin_submit(false, Language::En),
            Err(Rejection::Form(FormError::Invalid))
        );

        form.accept_policy = false;
        assert_eq!(
            form.begin_submit(true, Language::En),
            Err(Rejection::Form(FormError::PolicyNotAccepted))
        );

        form.accept_policy = true;
        form.data.message = "   ".to_string();
        form.data.name = " ".to_string();
        assert_eq!(
            form.begin_submit(true, Language::En),
            Err(Rejection::Form(FormError::EmptyMessage))
        );
        assert!(form.message_missing());
        assert!(form.name_missing());

        form.data.message = "hi".to_string();
        assert_eq!(
            form.begin_submit(true, Language::En),
            Err(Rejection::Form(FormError::EmptyName))
        );
        assert!(form.feedback.form_invalid);
        assert!(!form.feedback.sending);
    }

    #[test]
    fn test_success_clears_form() {
        let mut form = filled();
        form.begin_submit(true, Language::En).unwrap();
        let banner = form.finish(Ok(()), Language::En);

        assert_eq!(banner, Banner::Sent);
        assert_eq!(banner.duration(), Duration::from_secs(5));
        assert_eq!(form.data, ContactData::default());
        assert!(!form.accept_policy);
        assert!(form.feedback.sent);
        assert!(!form.feedback.sending);

        form.dismiss(banner);
        assert_eq!(form.feedback, Feedback::default());
    }

    #[test]
    fn test_failure_keeps_form_and_shows_error() {
        let mut form = filled();
        let data = form.begin_submit(true, Language::En).unwrap();
        let banner = form.finish(Err(SendError::Server(500)), Language::En);

        assert_eq!(banner, Banner::SendFailed);
        assert_eq!(banner.duration(), Duration::from_secs(7));
        assert_eq!(form.data, data);
        assert_eq!(
            form.feedback.send_error,
            Some("Server error. Please try again later.")
        );

        form.dismiss(Banner::SendFailed);
        assert_eq!(form.feedback.send_error, None);
    }

    #[test]
    fn test_new_submission_resets_feedback() {
        let mut form = filled();
        form.begin_submit(true, Language::En).unwrap();
        form.finish(Err(SendError::BadRequest), Language::En);
        assert!(form.feedback.send_error.is_some());

        form.begin_submit(true, Language::En).unwrap();
        assert_eq!(form.feedback.send_error, None);
        assert!(form.feedback.sending);
    }

    #[test]
    fn test_banner_durations() {
        assert_eq!(Banner::EmailInvalid.duration(), Duration::from_secs(6));
        assert_eq!(Banner::FormInvalid.duration(), Duration::from_secs(5));
    }
}
