//! Waitlist signup payload, submission status and error taxonomy
//!
//! These types are shared by the browser (which submits signups) and the
//! server (which stores them), so both sides agree on the wire format and on
//! what counts as a duplicate signup.

use serde::{Deserialize, Serialize};

/// Outbound form linked from the header and the capture modal
pub const WAITLIST_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScTFSPF5aTDuokgFeSQMsI4CKHvvb-X-EKO0DT31UviEYSDtg/viewform?usp=dialog";

/// API error code for an email that is already on the waitlist
pub const DUPLICATE_EMAIL_CODE: &str = "DUPLICATE_EMAIL";

/// Maximum accepted email length (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum accepted idea length in characters
pub const MAX_IDEA_LENGTH: usize = 2000;

/// Insert payload for a waitlist signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistSignup {
    pub email: String,
    pub idea: String,
}

impl WaitlistSignup {
    pub fn new(email: impl Into<String>, idea: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            idea: idea.into(),
        }
    }

    /// Trim and lowercase the email so duplicates are detected regardless of
    /// how the visitor typed it
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            idea: self.idea,
        }
    }
}

/// JSON error body returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Why a submission that reached the store did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("already on waitlist")]
    DuplicateEmail,

    #[error("submission failed: {0}")]
    SubmissionFailed(String),
}

impl SubmissionError {
    /// Text shown to the visitor in the capture modal
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::DuplicateEmail => "You're already on the waitlist!",
            SubmissionError::SubmissionFailed(_) => "Something went wrong. Please try again.",
        }
    }

    /// Classify a non-success API response.
    ///
    /// `code` is the `code` field of the [`ApiError`] body, when it could be
    /// decoded.
    pub fn from_response(status: u16, code: Option<&str>) -> Self {
        if status == 409 || code == Some(DUPLICATE_EMAIL_CODE) {
            SubmissionError::DuplicateEmail
        } else {
            SubmissionError::SubmissionFailed(match code {
                Some(code) => format!("HTTP {status} ({code})"),
                None => format!("HTTP {status}"),
            })
        }
    }
}

/// Submission refused locally, before any request is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("email is required")]
    EmptyEmail,

    #[error("a submission is already in flight")]
    InFlight,

    #[error("already joined the waitlist")]
    AlreadyJoined,
}

/// State of the waitlist attempt shown in the capture modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WaitlistStatus {
    #[default]
    Idle,
    Submitting,
    /// Holds the idea snapshot taken when the attempt was submitted
    Succeeded { idea: String },
    Failed(SubmissionError),
}

impl WaitlistStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, WaitlistStatus::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, WaitlistStatus::Succeeded { .. })
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            WaitlistStatus::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    pub fn confirmed_idea(&self) -> Option<&str> {
        match self {
            WaitlistStatus::Succeeded { idea } => Some(idea),
            _ => None,
        }
    }
}

/// Server-side validation of a normalized signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    #[error("A valid email is required")]
    InvalidEmail,

    #[error("Idea must be at most 2000 characters")]
    IdeaTooLong,
}

/// Validate a signup as received by the API.
///
/// Only checks what the page itself guarantees (non-blank email with an `@`,
/// bounded lengths); format checks beyond that are left to the input field.
pub fn validate_signup(signup: &WaitlistSignup) -> Result<(), SignupValidationError> {
    let email = signup.email.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH || !email.contains('@') {
        return Err(SignupValidationError::InvalidEmail);
    }
    if signup.idea.chars().count() > MAX_IDEA_LENGTH {
        return Err(SignupValidationError::IdeaTooLong);
    }
    Ok(())
}
