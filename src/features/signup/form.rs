//! Signup form state machine. One instance owns the field values, per-field
//! touched flags, the submitting flag, and the current API error; all
//! mutation goes through its methods so the invariants hold:
//!
//! - `api_error` is set only after a failed submission and is cleared on any
//!   password edit or on re-submit.
//! - `submitting` is true only between `begin_submit` and `finish_submit`;
//!   re-entrant begins are ignored so at most one request is in flight.
//! - touched flags are monotonic; they never revert to untouched.

use super::{outcome::SubmissionOutcome, rules};

/// Per-field touched flags, used to gate validation feedback in the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Touched {
    pub username: bool,
    pub password: bool,
}

/// Form field values and interaction state for one signup attempt.
#[derive(Clone, Debug, Default)]
pub(crate) struct SignupForm {
    username: String,
    password: String,
    touched: Touched,
    submitting: bool,
    api_error: Option<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn touched(&self) -> Touched {
        self.touched
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    /// Replaces the username; no validation side effects.
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    /// Replaces the password. Editing acknowledges a prior API error, so any
    /// set error is cleared before revalidation.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.api_error = None;
    }

    pub fn blur_username(&mut self) {
        self.touched.username = true;
    }

    pub fn blur_password(&mut self) {
        self.touched.password = true;
    }

    pub fn username_valid(&self) -> bool {
        rules::username_valid(&self.username)
    }

    pub fn password_valid(&self) -> bool {
        rules::password_valid(&self.password)
    }

    /// Unmet password rules for the current value, recomputed on every call.
    pub fn unmet_rules(&self) -> Vec<&'static str> {
        rules::unmet_rules(&self.password)
    }

    /// Gates a submit attempt. When local validation blocks it, both fields
    /// are marked touched so their messages show immediately and no request
    /// may be issued. Otherwise the prior API error is cleared and the form
    /// enters the submitting state. Returns whether a request should go out.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }

        if !self.username_valid() || !self.password_valid() {
            self.touched.username = true;
            self.touched.password = true;
            return false;
        }

        self.api_error = None;
        self.submitting = true;
        true
    }

    /// Records the outcome of a settled request. The submitting flag resets
    /// unconditionally; non-success outcomes leave their message as the
    /// current API error.
    pub fn finish_submit(&mut self, outcome: &SubmissionOutcome) {
        self.api_error = outcome.message().map(str::to_string);
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{SignupForm, SubmissionOutcome};

    const VALID_PASSWORD: &str = "Abcdef1234";

    fn valid_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.set_username("alice");
        form.set_password(VALID_PASSWORD);
        form
    }

    #[test]
    fn blur_marks_fields_touched_monotonically() {
        let mut form = SignupForm::new();
        assert!(!form.touched().username);
        assert!(!form.touched().password);

        form.blur_username();
        form.blur_password();
        assert!(form.touched().username);
        assert!(form.touched().password);

        // Editing never reverts touched state.
        form.set_username("alice");
        form.set_password("something");
        assert!(form.touched().username);
        assert!(form.touched().password);
    }

    #[test]
    fn begin_submit_blocks_on_empty_username() {
        let mut form = SignupForm::new();
        form.set_password(VALID_PASSWORD);

        assert!(!form.begin_submit());
        assert!(!form.is_submitting());
        // A blocked submit surfaces validation on both fields at once.
        assert!(form.touched().username);
        assert!(form.touched().password);
    }

    #[test]
    fn begin_submit_blocks_on_invalid_password() {
        let mut form = SignupForm::new();
        form.set_username("alice");
        form.set_password("short");

        assert!(!form.begin_submit());
        assert!(!form.is_submitting());
    }

    #[test]
    fn begin_submit_enters_submitting_and_clears_prior_error() {
        let mut form = valid_form();
        form.finish_submit(&SubmissionOutcome::AuthError);
        assert!(form.api_error().is_some());

        assert!(form.begin_submit());
        assert!(form.is_submitting());
        assert_eq!(form.api_error(), None);
    }

    #[test]
    fn begin_submit_ignores_reentrant_attempts() {
        let mut form = valid_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn password_edit_clears_api_error_immediately() {
        let mut form = valid_form();
        assert!(form.begin_submit());
        form.finish_submit(&SubmissionOutcome::GenericError);
        assert_eq!(
            form.api_error(),
            Some("Something went wrong, please try again.")
        );

        form.set_password("x");
        assert_eq!(form.api_error(), None);
    }

    #[test]
    fn username_edit_keeps_api_error() {
        let mut form = valid_form();
        assert!(form.begin_submit());
        form.finish_submit(&SubmissionOutcome::ServerError);

        form.set_username("bob");
        assert!(form.api_error().is_some());
    }

    #[test]
    fn finish_submit_resets_submitting_for_every_outcome() {
        for outcome in [
            SubmissionOutcome::Success,
            SubmissionOutcome::AuthError,
            SubmissionOutcome::ServerError,
            SubmissionOutcome::RejectedPassword,
            SubmissionOutcome::GenericError,
        ] {
            let mut form = valid_form();
            assert!(form.begin_submit());
            form.finish_submit(&outcome);
            assert!(!form.is_submitting());
            assert_eq!(form.api_error(), outcome.message());
        }
    }

    #[test]
    fn success_outcome_sets_no_api_error() {
        let mut form = valid_form();
        assert!(form.begin_submit());
        form.finish_submit(&SubmissionOutcome::Success);
        assert_eq!(form.api_error(), None);
        assert!(!form.is_submitting());
    }
}
