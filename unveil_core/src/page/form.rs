// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation and message timing.
//!
//! Validation order is fixed: every field must be present and non-empty
//! before the email address is checked.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::time::Duration;

/// Pattern an email address must match.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Submit button label while the simulated send is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Simulated send latency.
pub const SEND_DELAY: Duration = Duration::from_millis(1500);

/// How long a form message stays before fading.
pub const MESSAGE_VISIBLE: Duration = Duration::from_millis(5000);

/// Fade-out before the message is hidden.
pub const MESSAGE_FADE: Duration = Duration::from_millis(500);

/// `animation` value when a message appears.
pub const MESSAGE_FADE_IN: &str = "fadeIn 0.5s ease-out";

/// `animation` value when a message starts to disappear.
pub const MESSAGE_FADE_OUT: &str = "fadeOut 0.5s ease-out";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));

/// Returns `true` if `email` looks like an address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The field's `name` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A field was absent or empty.
    MissingField(Field),
    /// The email address did not match [`EMAIL_PATTERN`].
    InvalidEmail,
}

impl FormError {
    /// Message shown to the visitor.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in all fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing field `{}`", field.as_str()),
            Self::InvalidEmail => f.write_str("invalid email address"),
        }
    }
}

impl core::error::Error for FormError {}

/// Raw field values read from the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormInput<'a> {
    /// Sender name.
    pub name: Option<&'a str>,
    /// Sender email address.
    pub email: Option<&'a str>,
    /// Subject line.
    pub subject: Option<&'a str>,
    /// Message body.
    pub message: Option<&'a str>,
}

/// A validated submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission<'a> {
    /// Sender name.
    pub name: &'a str,
    /// Sender email address.
    pub email: &'a str,
    /// Subject line.
    pub subject: &'a str,
    /// Message body.
    pub message: &'a str,
}

impl<'a> FormInput<'a> {
    fn get(&self, field: Field) -> Option<&'a str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    fn require(&self, field: Field) -> Result<&'a str, FormError> {
        self.get(field)
            .filter(|value| !value.is_empty())
            .ok_or(FormError::MissingField(field))
    }

    /// Checks required fields, then the email address.
    pub fn validate(&self) -> Result<Submission<'a>, FormError> {
        let submission = Submission {
            name: self.require(Field::Name)?,
            email: self.require(Field::Email)?,
            subject: self.require(Field::Subject)?,
            message: self.require(Field::Message)?,
        };
        if !is_valid_email(submission.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(submission)
    }
}

/// Styling class of a form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Submission accepted.
    Success,
    /// Submission rejected.
    Error,
}

impl MessageKind {
    /// Class list of the message element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Error => "form-message error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormInput<'static> {
        FormInput {
            name: Some("Ada"),
            email: Some("ada@example.org"),
            subject: Some("Hello"),
            message: Some("Nice site."),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let submission = complete().validate().unwrap();
        assert_eq!(submission.email, "ada@example.org");
    }

    #[test]
    fn empty_field_counts_as_missing() {
        let input = FormInput {
            subject: Some(""),
            ..complete()
        };
        assert_eq!(
            input.validate(),
            Err(FormError::MissingField(Field::Subject))
        );
        assert_eq!(
            FormInput::default().validate().unwrap_err().message(),
            "Please fill in all fields."
        );
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let input = FormInput {
            email: Some("nope"),
            message: None,
            ..complete()
        };
        assert_eq!(
            input.validate(),
            Err(FormError::MissingField(Field::Message))
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        let input = FormInput {
            email: Some("ada@example"),
            ..complete()
        };
        assert_eq!(input.validate(), Err(FormError::InvalidEmail));
    }
}
