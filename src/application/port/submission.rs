// SPDX-License-Identifier: MPL-2.0
//! Contact form submission port.
//!
//! The site does not own a delivery channel for contact requests. Whatever
//! relays them (an email gateway, a ticketing API) implements
//! [`ContactSubmitter`] and is injected into the application at startup.

use crate::domain::contact::ContactFormDraft;
use std::fmt;

// =============================================================================
// SubmissionError
// =============================================================================

/// Errors a submission endpoint can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The endpoint received the draft and refused it.
    Rejected(String),

    /// The endpoint could not be reached.
    Unavailable(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Rejected(msg) => write!(f, "Submission rejected: {msg}"),
            SubmissionError::Unavailable(msg) => write!(f, "Submission endpoint unavailable: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

// =============================================================================
// ContactSubmitter
// =============================================================================

/// Delivers a contact form draft to whoever answers contact requests.
///
/// Called synchronously from the update loop, once per accepted submit. The
/// draft is borrowed: the form keeps its values after submission.
pub trait ContactSubmitter: Send + Sync {
    /// Hands the draft over for delivery.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] if the draft could not be delivered.
    fn submit(&self, draft: &ContactFormDraft) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<ContactFormDraft>>,
    }

    impl ContactSubmitter for Recorder {
        fn submit(&self, draft: &ContactFormDraft) -> Result<(), SubmissionError> {
            self.seen.lock().unwrap().push(draft.clone());
            Ok(())
        }
    }

    #[test]
    fn submitter_is_object_safe_and_receives_the_draft() {
        let recorder = Recorder::default();
        let submitter: &dyn ContactSubmitter = &recorder;
        let draft = ContactFormDraft {
            name: "Ada".into(),
            ..ContactFormDraft::default()
        };

        submitter.submit(&draft).unwrap();

        assert_eq!(recorder.seen.lock().unwrap().as_slice(), &[draft]);
    }

    #[test]
    fn errors_display_their_cause() {
        let err = SubmissionError::Rejected("spam filter".into());
        assert_eq!(err.to_string(), "Submission rejected: spam filter");
    }
}
