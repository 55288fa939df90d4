//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `parse` - Free-text message parsing (single message or stdin batch)
//! - `sms` - Bank-SMS gate + parse
//! - `payment` - Payment-method detection and suggestions
//! - `categories` - Category lexicon lookups

pub mod categories;
pub mod parse;
pub mod payment;
pub mod sms;

// Re-export command functions for main.rs
pub use categories::*;
pub use parse::*;
pub use payment::*;
pub use sms::*;

use chrono::NaiveDate;
use finch_core::TransactionDraft;
use serde::Serialize;

/// A draft enriched with an entry date, the record shape downstream
/// persistence would store. The parsers themselves never see dates.
#[derive(Debug, Clone, Serialize)]
pub struct DraftRecord {
    #[serde(flatten)]
    pub draft: TransactionDraft,
    pub date: NaiveDate,
}

impl DraftRecord {
    pub fn today(draft: TransactionDraft) -> Self {
        Self {
            draft,
            date: chrono::Local::now().date_naive(),
        }
    }
}

/// Render a draft in the one-line human format shared by parse and sms
pub fn describe_draft(draft: &TransactionDraft) -> String {
    format!(
        "{} {:.2} · {} · {}",
        draft.kind, draft.amount, draft.category, draft.description
    )
}
