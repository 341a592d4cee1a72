use super::toast::ToastKind;
use crate::relay::{EmailRelay, TemplateParams};
use crate::utils::error::{FolioError, ValidationError};
use regex::Regex;
use std::sync::OnceLock;

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_FAILED: &str = "Failed to send message. Please try again.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Loose address check: something, `@`, something, `.`, something, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|regex| regex.is_match(email))
}

/// The contact form's fields and in-flight state.
///
/// Submission is split in two so an event-driven host can run the relay call
/// as a background task: [`ContactForm::begin_submit`] validates and marks the
/// form busy, [`ContactForm::finish_submit`] applies the result.
/// [`ContactForm::submit`] does both around a single relay call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and marks the form in flight. Returns the relay parameters.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, ValidationError> {
        if self.submitting {
            return Err(ValidationError::AlreadySubmitting);
        }
        self.validate()?;
        self.submitting = true;

        Ok([
            ("user_name", self.name.trim()),
            ("user_email", self.email.trim()),
            ("message", self.message.trim()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect())
    }

    /// Clears the in-flight flag, and the fields too if the send succeeded.
    pub fn finish_submit<E>(&mut self, result: &Result<(), E>) {
        self.submitting = false;
        if result.is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }

    /// Validates, then makes exactly one relay call.
    pub async fn submit(
        &mut self,
        relay: &dyn EmailRelay,
        template_id: &str,
    ) -> Result<(), FolioError> {
        let params = self.begin_submit()?;
        let result = relay.send(template_id, params).await;
        self.finish_submit(&result);

        if let Err(err) = &result {
            tracing::warn!("contact message failed: {err}");
        }
        result.map_err(FolioError::from)
    }
}

/// Toast to show for a submission result. `None` for a refused double submit.
pub fn feedback_for(result: &Result<(), FolioError>) -> Option<(ToastKind, &'static str)> {
    match result {
        Ok(()) => Some((ToastKind::Success, MSG_SENT)),
        Err(FolioError::Validation(ValidationError::AlreadySubmitting)) => None,
        Err(FolioError::Validation(ValidationError::InvalidEmail)) => {
            Some((ToastKind::Error, MSG_INVALID_EMAIL))
        }
        Err(FolioError::Validation(ValidationError::MissingField(_))) => {
            Some((ToastKind::Error, MSG_MISSING_FIELDS))
        }
        Err(_) => Some((ToastKind::Error, MSG_FAILED)),
    }
}
