//! Newsletter and contact forms.
//!
//! Submission is simulated: the landing app waits for the configured delay
//! and then reports success. Only the email check is real.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Form-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The email field does not look like an address.
    #[error("please enter a valid email address")]
    InvalidEmail,
    /// A required field is empty or whitespace.
    #[error("please fill in {0}")]
    MissingField(&'static str),
}

/// Loose email check: something, `@`, something, `.`, something.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Inline status shown under a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Nothing to report
    #[default]
    Idle,
    /// Waiting for the (simulated) backend
    Submitting,
    /// Accepted
    Success,
    /// Rejected by validation
    Error,
}

impl SubmitState {
    /// Whether the submit button should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

/// Footer newsletter signup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    state: SubmitState,
}

impl NewsletterForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current status.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Field edited. Any shown result is cleared.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.email = value.into();
        if self.state != SubmitState::Idle {
            self.state = SubmitState::Idle;
        }
    }

    /// Submit pressed. On success the form is `Submitting` and the caller
    /// should call [`complete`](Self::complete) once the request finishes.
    pub fn submit(&mut self) -> Result<String, FormError> {
        if !is_valid_email(&self.email) {
            self.state = SubmitState::Error;
            return Err(FormError::InvalidEmail);
        }
        self.state = SubmitState::Submitting;
        Ok(self.email.clone())
    }

    /// Request finished: show success and clear the field.
    pub fn complete(&mut self) {
        self.state = SubmitState::Success;
        self.email.clear();
    }
}

/// Demo request form on the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Reply address
    pub email: String,
    /// Company or gym name
    pub company: String,
    /// Free-form message
    pub message: String,
}

impl ContactRequest {
    /// All fields are required; the email must pass [`is_valid_email`].
    /// Reports the first problem in form order.
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [
            ("your first name", &self.first_name),
            ("your last name", &self.last_name),
            ("your email", &self.email),
            ("your company or gym name", &self.company),
            ("a message", &self.message),
        ];
        if let Some((label, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FormError::MissingField(label));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("john@example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn newsletter_invalid_then_edit_resets() {
        let mut form = NewsletterForm::new();
        form.on_input("nope");
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        assert_eq!(form.state(), SubmitState::Error);

        form.on_input("nope@");
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn newsletter_success_clears_field() {
        let mut form = NewsletterForm::new();
        form.on_input("you@company.com");
        assert_eq!(form.submit(), Ok("you@company.com".to_string()));
        assert!(form.state().is_busy());

        form.complete();
        assert_eq!(form.state(), SubmitState::Success);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn contact_request_requires_everything() {
        let mut request = ContactRequest {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            company: "FitZone Elite".into(),
            message: "  ".into(),
        };
        assert_eq!(request.validate(), Err(FormError::MissingField("a message")));
        request.message = "We have 40 machines.".into();
        assert_eq!(request.validate(), Ok(()));

        request.email = "john".into();
        assert_eq!(request.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn contact_request_with_only_email_is_rejected() {
        let request = ContactRequest {
            email: "a@b.c".into(),
            ..Default::default()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err, FormError::MissingField("your first name"));
        assert_eq!(err.to_string(), "please fill in your first name");
    }
}
