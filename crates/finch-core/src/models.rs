//! Domain models for finch
//!
//! These are the types the parsing pipeline produces. A [`TransactionDraft`]
//! is deliberately minimal: the caller assigns identity, date, and account
//! before persisting; the parsers never see any of that.

use serde::{Deserialize, Serialize};

/// Cash-flow direction of a parsed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Catch-all category for this direction when no keyword matches.
    ///
    /// The category vocabularies are partitioned by direction, so the
    /// fallback must be direction-appropriate too.
    pub fn fallback_category(&self) -> &'static str {
        match self {
            Self::Income => "other income",
            Self::Expense => "other",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal structured record produced by parsing, prior to enrichment
///
/// Invariants upheld by every parser:
/// - `amount` is strictly positive (unparsable amounts yield no draft at all)
/// - `category` belongs to the vocabulary for `kind`
/// - `description` is never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

/// Display metadata for a category badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Payment channel inferred from message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
    BankTransfer,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Upi => "upi",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "upi" => Ok(Self::Upi),
            "card" => Ok(Self::Card),
            "bank_transfer" | "banktransfer" | "transfer" => Ok(Self::BankTransfer),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown payment method: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of payment-method detection
///
/// `confidence` is a fixed per-rule constant in [0, 1], not a computed
/// probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodMatch {
    pub method: PaymentMethod,
    pub confidence: f64,
    pub suggestion: String,
}
