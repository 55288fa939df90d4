//! Inbound message routing
//!
//! The [`InboundRouter`] is the single narrow seam the platform messaging
//! bridge talks to: it hands over a raw `(body, sender)` pair and gets back
//! a draft or nothing. All platform concerns (permissions, plugin probing,
//! listener lifecycle) stay on the bridge side; the router is an explicitly
//! constructed component with no process-wide state, so tests can build as
//! many as they like.

use tracing::debug;

use crate::error::Result;
use crate::models::TransactionDraft;
use crate::sms::{is_bank_message, SmsParser};

/// Gate-then-parse pipeline for inbound SMS messages
pub struct InboundRouter {
    sms: SmsParser,
}

impl InboundRouter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sms: SmsParser::new()?,
        })
    }

    /// Handle one raw inbound message.
    ///
    /// Returns `None` both when the message fails the bank gate and when the
    /// parser finds no positive amount; callers that care about the
    /// difference can check [`is_bank_message`] themselves.
    pub fn on_raw_message(&self, body: &str, sender: &str) -> Option<TransactionDraft> {
        if !is_bank_message(body, sender) {
            debug!(sender, "message rejected by bank gate");
            return None;
        }

        self.sms.parse(body)
    }
}
