//! Free-text transaction parser
//!
//! Turns user-typed notes like "Spent $25 on lunch" into a
//! [`TransactionDraft`]. Failing to extract a positive amount is the only
//! hard failure; direction and category always resolve via defaults, so any
//! amount-bearing message yields some draft.

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::models::{TransactionDraft, TransactionKind};

/// Keywords that vote for income when inferring direction
const INCOME_KEYWORDS: &[&str] = &[
    "earned",
    "salary",
    "paid",
    "received",
    "income",
    "bonus",
    "freelance",
    "sold",
];

/// Keywords that vote for expense when inferring direction
const EXPENSE_KEYWORDS: &[&str] = &[
    "spent",
    "bought",
    "paid for",
    "purchased",
    "cost",
    "bill",
    "rent",
    "food",
    "gas",
];

/// Income category cascade. First matching row wins; order is significant.
const INCOME_CATEGORIES: &[(&[&str], &str)] = &[
    (&["salary", "job", "wage"], "salary"),
    (&["freelance", "contract", "consulting"], "freelance"),
    (&["bonus", "tip"], "bonus"),
    (&["investment", "dividend", "interest"], "investment"),
    (&["rent", "rental"], "rental income"),
    (&["refund", "return"], "refund"),
];

/// Expense category cascade. First matching row wins; order is significant.
const EXPENSE_CATEGORIES: &[(&[&str], &str)] = &[
    (&["food", "lunch", "dinner", "coffee"], "food"),
    (&["gas", "uber", "transport"], "transport"),
    (&["movie", "game", "entertainment"], "entertainment"),
    (&["rent", "electricity", "bill"], "bills"),
    (&["shopping", "clothes", "bought"], "shopping"),
    (&["doctor", "health", "medicine"], "health"),
];

/// Filler words stripped from the message when synthesizing a description
const STOPWORDS: &str = r"(?i)\b(?:spent|earned|paid|for|on|the|a|an|i|my)\b";

/// Parser for user-typed natural-language messages
///
/// Pure and stateless after construction; safe to share across threads.
pub struct MessageParser {
    amount_re: Regex,
    stopword_re: Regex,
}

impl MessageParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            amount_re: Regex::new(r"\$?\s*(\d+(?:\.\d{1,2})?)")?,
            stopword_re: Regex::new(STOPWORDS)?,
        })
    }

    /// Parse a typed message into a draft, or `None` when no positive
    /// amount can be extracted.
    pub fn parse(&self, text: &str) -> Option<TransactionDraft> {
        let amount = self.extract_amount(text)?;
        let kind = infer_kind(text);
        let category = infer_category(text, kind);
        let description = self.synthesize_description(text, kind, &category);

        debug!(
            kind = kind.as_str(),
            amount,
            category = %category,
            "parsed free-text message"
        );

        Some(TransactionDraft {
            kind,
            amount,
            category,
            description,
        })
    }

    fn extract_amount(&self, text: &str) -> Option<f64> {
        let caps = self.amount_re.captures(text)?;
        let amount: f64 = caps.get(1)?.as_str().parse().ok()?;
        if amount > 0.0 {
            Some(amount)
        } else {
            None
        }
    }

    /// Strip amounts and filler words from the original text; fall back to a
    /// synthesized "<Kind> - <category>" label when nothing survives.
    fn synthesize_description(
        &self,
        text: &str,
        kind: TransactionKind,
        category: &str,
    ) -> String {
        let without_amounts = self.amount_re.replace_all(text, " ");
        let without_fillers = self.stopword_re.replace_all(&without_amounts, " ");
        let cleaned = without_fillers
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        if cleaned.is_empty() {
            let label = match kind {
                TransactionKind::Income => "Income",
                TransactionKind::Expense => "Expense",
            };
            format!("{} - {}", label, category)
        } else {
            capitalize_first(&cleaned)
        }
    }
}

/// Infer cash-flow direction from keyword votes.
///
/// Income wins only when income keywords appear without any expense keyword;
/// every ambiguous case (both sets hit, or neither) defaults to expense.
fn infer_kind(text: &str) -> TransactionKind {
    let lower = text.to_lowercase();
    let has_income = INCOME_KEYWORDS.iter().any(|k| lower.contains(k));
    let has_expense = EXPENSE_KEYWORDS.iter().any(|k| lower.contains(k));

    if has_income && !has_expense {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

/// Walk the direction-specific cascade; fall back to the direction's
/// catch-all category.
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

    kind.fallback_category().to_string()
}

/// Uppercase the first letter, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
