//! Bank-SMS transaction parsing
//!
//! Two pieces:
//! - [`is_bank_message`]: a cheap gate deciding whether an inbound SMS even
//!   comes from a bank or payment provider, so random texts never become
//!   transactions.
//! - [`SmsParser`]: extracts a [`TransactionDraft`] from structured-but-
//!   variable bank notification text.
//!
//! The heuristics here are deliberately separate from the free-text parser
//! in [`crate::message`]: bank notifications follow a different grammar
//! (currency markers, debit/credit verbs, merchant clauses) than typed
//! notes, and sharing vocabularies would silently change categorization.

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::message::capitalize_first;
use crate::models::{TransactionDraft, TransactionKind};

/// Terms that mark an SMS as originating from a bank or payment entity,
/// checked against both the body and the sender id.
const BANK_TERMS: &[&str] = &[
    "bank",
    "debit",
    "credit",
    "transaction",
    "payment",
    "transfer",
    "withdraw",
    "deposit",
    "balance",
    "account",
    "upi",
    // providers
    "paytm",
    "gpay",
    "phonepe",
    "amazon pay",
    "razorpay",
    // banks
    "hdfc",
    "sbi",
    "icici",
    "axis",
    "kotak",
    "pnb",
    "bob",
    "canara",
    "union",
];

/// Keywords that vote for a debit (money out)
const DEBIT_KEYWORDS: &[&str] = &["debited", "debit", "withdrawn", "purchase", "spent", "paid"];

/// Keywords that vote for a credit (money in)
const CREDIT_KEYWORDS: &[&str] = &[
    "credited",
    "credit",
    "received",
    "deposited",
    "refund",
    "salary",
    "transfer received",
];

/// Secondary heuristic: these force income when the debit/credit vote is
/// ambiguous (both sets hit, or neither)
const INCOME_OVERRIDES: &[&str] = &["salary", "refund", "cashback"];

/// Expense category cascade for SMS text. First matching row wins.
const EXPENSE_CATEGORIES: &[(&[&str], &str)] = &[
    (&["fuel", "petrol", "diesel"], "fuel"),
    (&["food", "restaurant", "zomato", "swiggy"], "food"),
    (&["uber", "ola", "metro"], "transport"),
    (&["amazon", "flipkart", "shopping"], "shopping"),
    (&["electricity", "water", "gas", "bill"], "bills"),
    (&["movie", "entertainment"], "entertainment"),
];

/// Income category cascade for SMS text. First matching row wins.
const INCOME_CATEGORIES: &[(&[&str], &str)] = &[
    (&["salary", "wage"], "salary"),
    (&["interest", "dividend"], "investment"),
    (&["refund", "cashback"], "refund"),
];

/// Decide whether an SMS plausibly comes from a bank/payment entity.
///
/// Pure pre-filter: matching here only makes the message *eligible* for
/// parsing, it does not guarantee a transaction comes out.
pub fn is_bank_message(body: &str, sender: &str) -> bool {
    let body_lower = body.to_lowercase();
    let sender_lower = sender.to_lowercase();

    BANK_TERMS
        .iter()
        .any(|term| body_lower.contains(term) || sender_lower.contains(term))
}

/// Parser for bank/payment-provider notification SMS
///
/// Pure and stateless after construction; safe to share across threads.
pub struct SmsParser {
    amount_patterns: Vec<Regex>,
    merchant_patterns: Vec<Regex>,
}

impl SmsParser {
    pub fn new() -> Result<Self> {
        // Ordered: currency marker before the numeral, numeral before the
        // marker, then an explicit amount:/amt: label. First hit wins.
        let amount_patterns = vec![
            Regex::new(r"(?i)(?:\brs\.?|\binr|₹)\s*(\d[\d,]*(?:\.\d{1,2})?)")?,
            Regex::new(r"(?i)(\d[\d,]*(?:\.\d{1,2})?)\s*(?:rs\b\.?|inr\b|₹)")?,
            Regex::new(r"(?i)\b(?:amount|amt)\s*:?\s*(?:\brs\.?|\binr|₹)?\s*(\d[\d,]*(?:\.\d{1,2})?)")?,
        ];

        // Ordered: at/to/from clause, merchant:/vendor: label, upi handle.
        // Captures stop at on/via/upi/card, a period, or end of text.
        let merchant_patterns = vec![
            Regex::new(r"(?i)\b(?:at|to|from)\s+(.+?)(?:\s+(?:on|via|upi|card)\b|\.|$)")?,
            Regex::new(r"(?i)(?:merchant|vendor)\s*:\s*(.+?)(?:\s+(?:on|via|upi|card)\b|\.|$)")?,
            Regex::new(r"(?i)\bupi-([a-z0-9@._-]+)")?,
        ];

        Ok(Self {
            amount_patterns,
            merchant_patterns,
        })
    }

    /// Parse bank SMS text into a draft, or `None` when no positive amount
    /// can be extracted.
    pub fn parse(&self, text: &str) -> Option<TransactionDraft> {
        let amount = self.extract_amount(text)?;
        let kind = infer_kind(text);
        let category = infer_category(text, kind);
        let merchant = self.extract_merchant(text);

        let description = match merchant {
            Some(m) => capitalize_first(&m),
            None => fallback_description(kind, &category),
        };

        debug!(
            kind = kind.as_str(),
            amount,
            category = %category,
            "parsed bank SMS"
        );

        Some(TransactionDraft {
            kind,
            amount,
            category,
            description,
        })
    }

    fn extract_amount(&self, text: &str) -> Option<f64> {
        for pattern in &self.amount_patterns {
            if let Some(caps) = pattern.captures(text) {
                let raw = caps.get(1)?.as_str().replace(',', "");
                if let Ok(amount) = raw.parse::<f64>() {
                    if amount > 0.0 {
                        return Some(amount);
                    }
                }
                // A matched pattern with a non-positive amount still ends
                // the search; later patterns would re-find the same numeral.
                return None;
            }
        }
        None
    }

    fn extract_merchant(&self, text: &str) -> Option<String> {
        for pattern in &self.merchant_patterns {
            if let Some(caps) = pattern.captures(text) {
                let captured = caps.get(1)?.as_str().trim();
                if !captured.is_empty() {
                    return Some(captured.to_string());
                }
            }
        }
        None
    }
}

/// Debit/credit keyword vote with the income-override tiebreak.
///
/// An unambiguous vote decides directly. When both sets match or neither
/// does, salary/refund/cashback force income, otherwise expense wins.
fn infer_kind(text: &str) -> TransactionKind {
    let lower = text.to_lowercase();
    let has_debit = DEBIT_KEYWORDS.iter().any(|k| lower.contains(k));
    let has_credit = CREDIT_KEYWORDS.iter().any(|k| lower.contains(k));

    match (has_debit, has_credit) {
        (true, false) => TransactionKind::Expense,
        (false, true) => TransactionKind::Income,
        _ => {
            if INCOME_OVERRIDES.iter().any(|k| lower.contains(k)) {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            }
        }
    }
}

/// Walk the direction-specific SMS cascade. Both directions fall back to
/// "other" here, unlike the free-text parser which uses "other income" for
/// income; the direction still shows up in the synthesized description,
/// see [`fallback_description`].
fn infer_category(text: &str, kind: TransactionKind) -> String {
    let lower = text.to_lowercase();
    let cascade = match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    };

    for (keywords, category) in cascade {
        if keywords.iter().any(|k| lower.contains(k)) {
            return (*category).to_string();
        }
    }

    "other".to_string()
}

fn fallback_description(kind: TransactionKind, category: &str) -> String {
    if category == "other" {
        match kind {
            TransactionKind::Income => "Income".to_string(),
            TransactionKind::Expense => "Expense".to_string(),
        }
    } else {
        capitalize_first(category)
    }
}
