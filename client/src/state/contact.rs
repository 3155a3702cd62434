//! Contact form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form moves `Idle -> Submitting -> Submitted` on success and
//! `Idle -> Submitting -> Idle` on failure. Fields are cleared only on
//! success so a failed submission can be resent by hand.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactSubmission;

pub const MISSING_FIELDS_NOTICE: &str = "Please fill in your name, email, and message.";
pub const INVALID_EMAIL_NOTICE: &str = "Please enter a valid email address.";
pub const SENT_NOTICE: &str = "Thanks! Your message has been sent.";
pub const FAILED_NOTICE: &str = "Something went wrong sending your message. Please try again.";

/// Submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: &str) -> Self {
        Self { kind: NoticeKind::Success, text: text.to_owned() }
    }

    fn error(text: &str) -> Self {
        Self { kind: NoticeKind::Error, text: text.to_owned() }
    }
}

/// Everything the contact section renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactSubmission,
    pub status: ContactStatus,
    pub notice: Option<Notice>,
}

impl ContactState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.form.name,
            ContactField::Email => &self.form.email,
            ContactField::Message => &self.form.message,
        }
    }

    /// Record user input. Editing after a successful send starts a new message.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.status == ContactStatus::Submitted {
            self.status = ContactStatus::Idle;
            self.notice = None;
        }
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Validate and move to `Submitting`, returning the payload to send.
    ///
    /// Returns `None` while a submission is already in flight or when the
    /// form is invalid (an error notice is set in that case).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.status == ContactStatus::Submitting {
            return None;
        }
        match validate(&self.form) {
            Ok(submission) => {
                self.status = ContactStatus::Submitting;
                self.notice = None;
                Some(submission)
            }
            Err(reason) => {
                self.notice = Some(Notice::error(reason));
                None
            }
        }
    }

    /// Apply the relay outcome.
    pub fn finish(&mut self, result: &Result<(), String>) {
        match result {
            Ok(()) => {
                self.form = ContactSubmission::default();
                self.status = ContactStatus::Submitted;
                self.notice = Some(Notice::success(SENT_NOTICE));
            }
            Err(_) => {
                self.status = ContactStatus::Idle;
                self.notice = Some(Notice::error(FAILED_NOTICE));
            }
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == ContactStatus::Submitting
    }
}

/// Trim fields and check they are present and the email is plausible.
///
/// # Errors
///
/// Returns the notice text describing the first problem found.
pub fn validate(form: &ContactSubmission) -> Result<ContactSubmission, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(MISSING_FIELDS_NOTICE);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL_NOTICE);
    }
    Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
