use std::time::Duration;

use http::{header::CONTENT_TYPE, StatusCode};
use thiserror::Error;

use super::ContactData;
use crate::{config::SiteConfig, i18n::Language};

pub const DEFAULT_ENDPOINT: &str = "https://birich.it/sendMail.php";

/// How long a test-mode submission pretends to be in flight.
pub const TEST_MODE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Nothing was sent; report success once `after` has elapsed.
    Simulated { after: Duration },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({0})")]
    Server(u16),
    #[error("request rejected as invalid")]
    BadRequest,
    #[error("unexpected response status {0}")]
    Other(u16),
    #[error("could not encode contact payload")]
    Encode,
}

impl SendError {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::Server(status.as_u16())
        } else if status == StatusCode::BAD_REQUEST {
            Self::BadRequest
        } else {
            Self::Other(status.as_u16())
        }
    }

    pub fn message(&self, lang: Language) -> &'static str {
        match self {
            Self::Network(_) => lang.pick(
                "Network error. Please check your connection.",
                "Netzwerkfehler. Bitte überprüfen Sie Ihre Verbindung.",
            ),
            Self::Server(_) => lang.pick(
                "Server error. Please try again later.",
                "Serverfehler. Bitte versuchen Sie es später erneut.",
            ),
            Self::BadRequest => lang.pick(
                "Invalid data. Please check your input.",
                "Ungültige Daten. Bitte überprüfen Sie Ihre Eingaben.",
            ),
            Self::Other(_) | Self::Encode => lang.pick(
                "Failed to send message. Please try again.",
                "Nachricht konnte nicht gesendet werden. Bitte versuchen Sie es erneut.",
            ),
        }
    }
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::from_status(status),
            None => Self::Network(err.to_string()),
        }
    }
}

/// Posts contact payloads to the mail endpoint.
#[derive(Debug, Clone)]
pub struct Mailer {
    client: reqwest::Client,
    endpoint: String,
    test_mode: bool,
}

impl Mailer {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_endpoint(config.contact_endpoint.clone(), config.test_mode)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, test_mode: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            test_mode,
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Sends the payload as a JSON string with a `text/plain` content type.
    /// The response body is ignored, any 2xx status counts as delivered.
    pub async fn send(&self, data: &ContactData) -> Result<Delivery, SendError> {
        if self.test_mode {
            log::info!("test mode, not sending contact form from {}", data.name);
            return Ok(Delivery::Simulated {
                after: TEST_MODE_DELAY,
            });
        }

        let body = serde_json::to_string(data).map_err(|_| SendError::Encode)?;
        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            log::warn!("contact endpoint answered {status}");
            return Err(SendError::from_status(status));
        }
        log::debug!("contact form delivered");
        Ok(Delivery::Sent)
    }
}
