//! Payment-method detection
//!
//! Scans free text for payment-channel keywords and returns a best match
//! with a fixed per-rule confidence. Rules are an ordered table: the first
//! rule with any keyword hit wins, even when a later rule would also match.
//! UPI is checked before cash, then card, bank transfer, and the catch-all.

use tracing::debug;

use crate::models::{PaymentMethod, PaymentMethodMatch};

/// One detection rule: keywords, resulting method, fixed confidence, and a
/// label the UI can prefill.
struct Rule {
    keywords: &'static [&'static str],
    method: PaymentMethod,
    confidence: f64,
    suggestion: &'static str,
}

/// Ordered rule table. Order is the tie-break: first match wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["upi", "gpay", "google pay", "phonepe", "paytm", "bhim"],
        method: PaymentMethod::Upi,
        confidence: 0.9,
        suggestion: "UPI",
    },
    Rule {
        keywords: &["cash", "paid in cash", "notes"],
        method: PaymentMethod::Cash,
        confidence: 0.8,
        suggestion: "Cash",
    },
    Rule {
        keywords: &["card", "credit card", "debit card", "visa", "mastercard", "swipe"],
        method: PaymentMethod::Card,
        confidence: 0.85,
        suggestion: "Card",
    },
    Rule {
        keywords: &["bank transfer", "neft", "imps", "rtgs", "wire", "netbanking"],
        method: PaymentMethod::BankTransfer,
        confidence: 0.8,
        suggestion: "Bank Transfer",
    },
    Rule {
        keywords: &["wallet", "cheque", "check", "voucher"],
        method: PaymentMethod::Other,
        confidence: 0.6,
        suggestion: "Other",
    },
];

/// Detect the payment method mentioned in `text`, if any.
pub fn detect_payment_method(text: &str) -> Option<PaymentMethodMatch> {
    let lower = text.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) {
            debug!(method = rule.method.as_str(), "payment method rule matched");
            return Some(PaymentMethodMatch {
                method: rule.method,
                confidence: rule.confidence,
                suggestion: rule.suggestion.to_string(),
            });
        }
    }

    None
}

/// Candidate methods for a partially typed input, for autocomplete.
///
/// A rule qualifies when any of its keywords relates to the partial input by
/// substring in either direction. Results are sorted by confidence,
/// highest first.
pub fn payment_method_suggestions(partial: &str) -> Vec<PaymentMethodMatch> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<PaymentMethodMatch> = RULES
        .iter()
        .filter(|rule| {
            rule.keywords
                .iter()
                .any(|k| k.contains(&needle) || needle.contains(k))
        })
        .map(|rule| PaymentMethodMatch {
            method: rule.method,
            confidence: rule.confidence,
            suggestion: rule.suggestion.to_string(),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}
