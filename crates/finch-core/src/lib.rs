//! finch Core Library
//!
//! Parsing core for the finch personal finance tracker:
//! - Free-text parser for typed messages ("Spent $25 on lunch")
//! - Bank-SMS parser for provider notification text
//! - Bank-message gate deciding which SMS are eligible for parsing
//! - Payment-method detector with fixed per-rule confidences
//! - Category lexicon with total display-metadata lookups
//!
//! Everything here is synchronous and side-effect-free: the same input
//! always produces the same output, and callers may share parsers across
//! threads without coordination. Persistence, UI, and the platform SMS
//! bridge live elsewhere and only exchange plain strings and drafts with
//! this crate.

pub mod categories;
pub mod error;
pub mod message;
pub mod models;
pub mod payment;
pub mod router;
pub mod sms;

pub use categories::{category_info, similar_categories};
pub use error::{Error, Result};
pub use message::MessageParser;
pub use models::{
    CategoryInfo, PaymentMethod, PaymentMethodMatch, TransactionDraft, TransactionKind,
};
pub use payment::{detect_payment_method, payment_method_suggestions};
pub use router::InboundRouter;
pub use sms::{is_bank_message, SmsParser};
