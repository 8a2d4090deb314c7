// SPDX-License-Identifier: MPL-2.0
//! Contact submission adapters.
//!
//! [`LogSubmitter`] is the default endpoint: it records every accepted draft
//! in the structured log and reports success. Deployments that relay contact
//! requests somewhere real inject their own [`ContactSubmitter`] instead.

use crate::application::port::{ContactSubmitter, SubmissionError};
use crate::domain::contact::{ContactFormDraft, Field};

/// Writes submitted drafts to the log under the `contact` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, draft: &ContactFormDraft) -> Result<(), SubmissionError> {
        tracing::info!(
            target: "contact",
            contact_name = %draft.name,
            email = %draft.email,
            company = %draft.company,
            phone = %draft.phone,
            service = draft.get(Field::Service),
            body = %draft.message,
            "contact form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn log_submitter_accepts_every_draft() {
        let submitter: Arc<dyn ContactSubmitter> = Arc::new(LogSubmitter);
        assert!(submitter.submit(&ContactFormDraft::default()).is_ok());

        let draft = ContactFormDraft {
            name: "Zhang San".into(),
            email: "zhang@example.cn".into(),
            message: "需要振动测试".into(),
            ..ContactFormDraft::default()
        };
        assert!(submitter.submit(&draft).is_ok());
    }
}
