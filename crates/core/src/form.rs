//! Form schemas and the submission state machine
//!
//! Every form is a plain value type implementing [`FormSchema`]. A
//! [`FormController`] owns the values, remembers which fields the user has
//! left (touched), and tracks the submission:
//!
//! ```text
//! Idle -> Submitting -> Succeeded
//!              |
//!              +------> Failed -> Submitting (retry)
//! ```
//!
//! Validation runs on demand on every read, so errors always reflect the
//! current values. Errors for a field are shown only after it was touched.

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Field name to message, first error per field wins
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record the first failing rule for `field`, if any
    pub fn check(&mut self, field: &str, rules: impl IntoIterator<Item = Option<String>>) {
        if let Some(message) = rules.into_iter().flatten().next() {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Single-field rules. Each returns the message on failure.
pub mod rules {
    use super::*;

    static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    });

    pub fn required(value: &str, label: &str) -> Option<String> {
        value
            .trim()
            .is_empty()
            .then(|| format!("{label} is required"))
    }

    /// Empty input passes; pair with [`required`]
    pub fn email(value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty() && !EMAIL_RE.is_match(value)).then(|| "Enter a valid email".to_string())
    }

    pub fn min_len(value: &str, min: usize, label: &str) -> Option<String> {
        (!value.is_empty() && value.chars().count() < min)
            .then(|| format!("{label} must be at least {min} characters"))
    }

    pub fn matches(value: &str, other: &str, message: &str) -> Option<String> {
        (value != other).then(|| message.to_string())
    }
}

/// A form's values plus its validation schema
pub trait FormSchema: Clone + PartialEq {
    /// Names of every field, in display order
    const FIELDS: &'static [&'static str];

    fn validate(&self) -> FieldErrors;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl FormSchema for ForgotPasswordForm {
    const FIELDS: &'static [&'static str] = &["email"];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(
            "email",
            [rules::required(&self.email, "Email"), rules::email(&self.email)],
        );
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormSchema for LoginForm {
    const FIELDS: &'static [&'static str] = &["email", "password"];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check(
            "email",
            [rules::required(&self.email, "Email"), rules::email(&self.email)],
        );
        errors.check(
            "password",
            [
                rules::required(&self.password, "Password"),
                rules::min_len(&self.password, MIN_PASSWORD_LEN, "Password"),
            ],
        );
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormSchema for SignupForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "password", "confirm_password"];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check("name", [rules::required(&self.name, "Name")]);
        errors.check(
            "email",
            [rules::required(&self.email, "Email"), rules::email(&self.email)],
        );
        errors.check(
            "password",
            [
                rules::required(&self.password, "Password"),
                rules::min_len(&self.password, MIN_PASSWORD_LEN, "Password"),
            ],
        );
        errors.check(
            "confirm_password",
            [
                rules::required(&self.confirm_password, "Confirm password"),
                rules::matches(&self.confirm_password, &self.password, "Passwords must match"),
            ],
        );
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub display_name: String,
    pub email: String,
}

impl FormSchema for SettingsForm {
    const FIELDS: &'static [&'static str] = &["display_name", "email"];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.check("display_name", [rules::required(&self.display_name, "Name")]);
        errors.check(
            "email",
            [rules::required(&self.email, "Email"), rules::email(&self.email)],
        );
        errors
    }
}

/// Where a form is in its submit cycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Values, touched fields and submission state of one form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormController<S> {
    values: S,
    touched: BTreeSet<&'static str>,
    submission: Submission,
}

impl<S: FormSchema> FormController<S> {
    pub fn new(values: S) -> Self {
        Self {
            values,
            touched: BTreeSet::new(),
            submission: Submission::Idle,
        }
    }

    pub fn values(&self) -> &S {
        &self.values
    }

    /// Change a value. Validation follows automatically.
    pub fn set_field(&mut self, edit: impl FnOnce(&mut S)) {
        edit(&mut self.values);
    }

    /// Mark a field as visited (blur)
    pub fn touch(&mut self, field: &str) {
        if let Some(name) = S::FIELDS.iter().find(|name| **name == field) {
            self.touched.insert(*name);
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn errors(&self) -> FieldErrors {
        self.values.validate()
    }

    /// Error to show under a field, only once the user has visited it
    pub fn visible_error(&self, field: &str) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Message of the last failed attempt
    pub fn failure(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid()
            && !matches!(
                self.submission,
                Submission::Submitting | Submission::Succeeded
            )
    }

    /// Start a submission and hand out the values to send.
    ///
    /// Every field counts as touched afterwards so all errors become visible.
    pub fn begin_submit(&mut self) -> CoreResult<S> {
        self.touched.extend(S::FIELDS.iter().copied());

        match self.submission {
            Submission::Submitting => {
                return Err(CoreError::submission("a submission is already in flight"));
            }
            Submission::Succeeded => {
                return Err(CoreError::submission("form was already submitted"));
            }
            Submission::Idle | Submission::Failed(_) => {}
        }

        let errors = self.errors();
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        self.submission = Submission::Submitting;
        Ok(self.values.clone())
    }

    /// Record the outcome of the request started by [`Self::begin_submit`]
    pub fn finish(&mut self, outcome: Result<(), String>) {
        if self.submission != Submission::Submitting {
            tracing::warn!("Ignoring submission outcome for a form that is not submitting");
            return;
        }
        self.submission = match outcome {
            Ok(()) => Submission::Succeeded,
            Err(message) => Submission::Failed(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forgot(email: &str) -> FormController<ForgotPasswordForm> {
        FormController::new(ForgotPasswordForm {
            email: email.to_string(),
        })
    }

    #[test]
    fn test_forgot_password_disabled_when_empty() {
        let form = forgot("");
        assert!(!form.can_submit());
        assert_eq!(form.errors().get("email"), Some("Email is required"));
    }

    #[test]
    fn test_forgot_password_disabled_when_malformed() {
        for bad in ["user", "user@", "user@host", "a b@c.d", "@example.com"] {
            let form = forgot(bad);
            assert!(!form.can_submit(), "{bad} should be rejected");
            assert_eq!(form.errors().get("email"), Some("Enter a valid email"));
        }
    }

    #[test]
    fn test_forgot_password_enabled_when_valid() {
        let form = forgot("admin@example.com");
        assert!(form.can_submit());
        assert!(form.is_valid());
    }

    #[test]
    fn test_submit_disables_until_finished() {
        let mut form = forgot("admin@example.com");
        let values = form.begin_submit().unwrap();
        assert_eq!(values.email, "admin@example.com");
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert!(matches!(
            form.begin_submit(),
            Err(CoreError::Submission { .. })
        ));
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut form = forgot("admin@example.com");
        form.begin_submit().unwrap();
        form.finish(Err("Server unavailable".into()));

        assert_eq!(form.failure(), Some("Server unavailable"));
        assert!(form.can_submit());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut form = forgot("admin@example.com");
        form.begin_submit().unwrap();
        form.finish(Ok(()));

        assert_eq!(form.submission(), &Submission::Succeeded);
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_err());
    }

    #[test]
    fn test_errors_visible_only_after_touch() {
        let mut form = forgot("");
        assert_eq!(form.visible_error("email"), None);
        form.touch("email");
        assert_eq!(form.visible_error("email").as_deref(), Some("Email is required"));

        form.set_field(|v| v.email = "ok@example.com".into());
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn test_invalid_submit_touches_everything() {
        let mut form = FormController::new(LoginForm::default());
        let err = form.begin_submit().unwrap_err();
        let CoreError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 2);
        assert!(form.is_touched("email"));
        assert!(form.is_touched("password"));
        assert_eq!(form.submission(), &Submission::Idle);
    }

    #[test]
    fn test_login_password_length() {
        let form = LoginForm {
            email: "a@b.co".into(),
            password: "short".into(),
        };
        assert_eq!(
            form.validate().get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_signup_passwords_must_match() {
        let form = SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "correct horse".into(),
            confirm_password: "correct horses".into(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirm_password"), Some("Passwords must match"));
    }

    #[test]
    fn test_unknown_field_is_not_touched() {
        let mut form = forgot("");
        form.touch("nope");
        assert!(!form.is_touched("nope"));
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut form = forgot("admin@example.com");
        form.finish(Ok(()));
        assert_eq!(form.submission(), &Submission::Idle);
    }
}
