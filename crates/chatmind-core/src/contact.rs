//! Contact form handling. Submissions are acknowledged and logged, never
//! delivered or stored.

use crate::model::{ContactAck, ContactSubmission};

/// Message returned for every submission
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message. We'll get back to you soon!";

#[derive(Clone, Debug, Default)]
pub struct ContactHandler;

impl ContactHandler {
    pub const fn new() -> Self {
        Self
    }

    /// Acknowledge a submission. Always succeeds; field presence is the
    /// caller's job.
    pub fn submit(&self, submission: &ContactSubmission) -> ContactAck {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "Contact form received"
        );

        ContactAck {
            success: true,
            message: CONTACT_ACK_MESSAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }
    }

    #[test]
    fn test_always_acknowledges() {
        let handler = ContactHandler::new();
        let expected = ContactAck {
            success: true,
            message: "Thank you for your message. We'll get back to you soon!".into(),
        };

        for _ in 0..3 {
            assert_eq!(handler.submit(&submission()), expected);
        }
    }

    #[test]
    fn test_empty_fields_still_acknowledged() {
        let handler = ContactHandler::new();
        let ack = handler.submit(&ContactSubmission {
            name: String::new(),
            email: String::new(),
            message: String::new(),
        });
        assert!(ack.success);
    }
}
