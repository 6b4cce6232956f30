//! Waitlist signup form and its submission flow.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit email. Please try again.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("invalid email address")]
    InvalidEmail,

    /// The endpoint answered with a non-2xx status.
    #[error("waitlist endpoint returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),
}

impl WaitlistError {
    /// Text shown under the email field.
    pub fn user_message(&self) -> &'static str {
        match self {
            WaitlistError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            WaitlistError::Rejected { .. } | WaitlistError::Network(_) => SUBMIT_FAILED_MESSAGE,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Registers an address with the remote waitlist.
#[allow(async_fn_in_trait)]
pub trait WaitlistClient {
    async fn register(&self, email: &str) -> Result<(), WaitlistError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaitlistForm {
    email: String,
    error: Option<WaitlistError>,
    submitting: bool,
}

impl WaitlistForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&WaitlistError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates the field and marks the form in flight. `Ok(None)` means a
    /// submission is already outstanding.
    pub fn begin(&mut self) -> Result<Option<String>, WaitlistError> {
        if self.submitting {
            return Ok(None);
        }
        if !is_valid_email(&self.email) {
            self.error = Some(WaitlistError::InvalidEmail);
            return Err(WaitlistError::InvalidEmail);
        }
        self.error = None;
        self.submitting = true;
        Ok(Some(self.email.clone()))
    }

    /// Settles an outstanding submission. The in-flight flag is always cleared.
    pub fn finish(&mut self, result: Result<(), WaitlistError>) -> Result<(), WaitlistError> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.email.clear();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    Registered,
    Failed(WaitlistError),
}

/// Runs one submission against `client`. `on_change` fires after every
/// mutation of `form` so the view can re-render; no borrow of `form` is held
/// across the request.
pub async fn submit<C, F>(client: &C, form: &std::cell::RefCell<WaitlistForm>, on_change: F) -> SubmitOutcome
where
    C: WaitlistClient,
    F: Fn(),
{
    let started = form.borrow_mut().begin();
    let email = match started {
        Ok(Some(email)) => email,
        Ok(None) => return SubmitOutcome::Busy,
        Err(_) => {
            on_change();
            return SubmitOutcome::Invalid;
        }
    };
    on_change();

    let result = client.register(&email).await;
    let settled = form.borrow_mut().finish(result);
    on_change();

    match settled {
        Ok(()) => SubmitOutcome::Registered,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeClient {
        result: Result<(), WaitlistError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeClient {
        fn answering(result: Result<(), WaitlistError>) -> Self {
            Self { result, calls: RefCell::new(Vec::new()) }
        }
    }

    impl WaitlistClient for FakeClient {
        async fn register(&self, email: &str) -> Result<(), WaitlistError> {
            self.calls.borrow_mut().push(email.to_string());
            self.result.clone()
        }
    }

    fn form_with(email: &str) -> RefCell<WaitlistForm> {
        let mut form = WaitlistForm::default();
        form.set_email(email);
        RefCell::new(form)
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_invalid_email_never_reaches_client() {
        let client = FakeClient::answering(Ok(()));
        let form = form_with("nope");
        let renders = Cell::new(0);

        let outcome = block_on(submit(&client, &form, || renders.set(renders.get() + 1)));

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(client.calls.borrow().is_empty());
        assert_eq!(form.borrow().error().map(WaitlistError::user_message), Some(INVALID_EMAIL_MESSAGE));
        assert!(!form.borrow().is_submitting());
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn test_successful_submission_clears_field() {
        let client = FakeClient::answering(Ok(()));
        let form = form_with("a@b.com");

        let outcome = block_on(submit(&client, &form, || {}));

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(*client.calls.borrow(), vec!["a@b.com".to_string()]);
        assert_eq!(form.borrow().email(), "");
        assert!(form.borrow().error().is_none());
        assert!(!form.borrow().is_submitting());
    }

    #[test]
    fn test_failed_submission_keeps_field() {
        let rejected = WaitlistError::Rejected { status: 409, message: Some("Email already registered".into()) };
        let client = FakeClient::answering(Err(rejected.clone()));
        let form = form_with("a@b.com");

        let outcome = block_on(submit(&client, &form, || {}));

        assert_eq!(outcome, SubmitOutcome::Failed(rejected));
        assert_eq!(form.borrow().email(), "a@b.com");
        assert_eq!(form.borrow().error().map(WaitlistError::user_message), Some(SUBMIT_FAILED_MESSAGE));
        assert!(!form.borrow().is_submitting());
    }

    #[test]
    fn test_network_failure_clears_in_flight_flag() {
        let client = FakeClient::answering(Err(WaitlistError::Network("connection reset".into())));
        let form = form_with("a@b.com");

        let outcome = block_on(submit(&client, &form, || {}));

        assert!(matches!(outcome, SubmitOutcome::Failed(WaitlistError::Network(_))));
        assert!(!form.borrow().is_submitting());
        assert_eq!(form.borrow().error().map(WaitlistError::user_message), Some(SUBMIT_FAILED_MESSAGE));
    }

    #[test]
    fn test_outstanding_submission_blocks_another() {
        let client = FakeClient::answering(Ok(()));
        let form = form_with("a@b.com");
        assert_eq!(form.borrow_mut().begin(), Ok(Some("a@b.com".to_string())));

        let outcome = block_on(submit(&client, &form, || {}));

        assert_eq!(outcome, SubmitOutcome::Busy);
        assert!(client.calls.borrow().is_empty());
        assert!(form.borrow().is_submitting());
    }

    #[test]
    fn test_editing_clears_inline_error() {
        let mut form = WaitlistForm::default();
        form.set_email("bad");
        assert!(form.begin().is_err());
        assert!(form.error().is_some());

        form.set_email("bad@");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_rejected_error_display() {
        let with_message = WaitlistError::Rejected { status: 400, message: Some("Invalid email".into()) };
        let without = WaitlistError::Rejected { status: 500, message: None };
        assert_eq!(with_message.to_string(), "waitlist endpoint returned 400: Invalid email");
        assert_eq!(without.to_string(), "waitlist endpoint returned 500: no details");
    }
}
