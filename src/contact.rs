mod form;
mod mailer;
mod placeholder;
mod validation;

pub use form::{Banner, ContactForm, Feedback, FormError, Rejection};
pub use mailer::{Delivery, Mailer, SendError, DEFAULT_ENDPOINT, TEST_MODE_DELAY};
pub use placeholder::{placeholder, Field, SMALL_SCREEN_BREAKPOINT};
pub use validation::{validate_email, EmailError};

use serde::{Deserialize, Serialize};

/// The payload sent to the mail endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub message: String,
}
