//! Integration tests for finch-core
//!
//! These tests exercise the full inbound pipeline: gate → parse → draft,
//! plus the cross-cutting lexicon and payment-method utilities, the way the
//! CLI and the (external) SMS bridge drive them.

use finch_core::{
    category_info, detect_payment_method, is_bank_message, similar_categories, InboundRouter,
    MessageParser, PaymentMethod, SmsParser, TransactionKind,
};

/// A realistic mixed inbox: only the bank notifications should survive the
/// gate, and of those only the amount-bearing ones become drafts.
#[test]
fn test_inbox_end_to_end() {
    let router = InboundRouter::new().unwrap();

    let inbox = [
        ("Hey, dinner at 8?", "Alice"),
        ("Your OTP is 482913. Do not share it.", "VM-NOTICE"),
        (
            "Your account has been debited by Rs 150.00 on 09-Jun-25 at Food Court via UPI. \
             Available balance: Rs 4,850.00",
            "VM-HDFCBK",
        ),
        ("Rs 50,000 credited to your account. Salary for Aug", "AD-SBIINB"),
        ("Your bank branch will be closed on Monday", "VM-ICICIB"),
    ];

    let drafts: Vec<_> = inbox
        .iter()
        .filter_map(|(body, sender)| router.on_raw_message(body, sender))
        .collect();

    assert_eq!(drafts.len(), 2);

    assert_eq!(drafts[0].kind, TransactionKind::Expense);
    assert_eq!(drafts[0].amount, 150.0);
    assert_eq!(drafts[0].category, "food");
    assert!(drafts[0].description.contains("Food Court"));

    assert_eq!(drafts[1].kind, TransactionKind::Income);
    assert_eq!(drafts[1].amount, 50000.0);
    assert_eq!(drafts[1].category, "salary");
}

/// Every draft a parser emits upholds the structural invariants the
/// downstream enrichment layer relies on.
#[test]
fn test_draft_invariants_hold_across_inputs() {
    let message = MessageParser::new().unwrap();
    let sms = SmsParser::new().unwrap();

    let typed = [
        "Spent $25 on lunch",
        "Earned $500 from freelance work",
        "$1 x",
        "paid $3.50",
        "bought stuff 99",
    ];
    let notifications = [
        "Rs 1 debited",
        "INR 2,500.00 credited to A/c",
        "Amt: 42 paid at Shop",
        "Rs 120 debited via UPI-someone@okaxis",
    ];

    for text in typed {
        let draft = message.parse(text).unwrap();
        assert!(draft.amount > 0.0, "amount must be positive for {:?}", text);
        assert!(!draft.description.is_empty());
        assert!(!draft.category.is_empty());
    }
    for text in notifications {
        let draft = sms.parse(text).unwrap();
        assert!(draft.amount > 0.0, "amount must be positive for {:?}", text);
        assert!(!draft.description.is_empty());
        assert!(!draft.category.is_empty());
    }
}

/// Free-text and SMS parsing stay independent: the same words can land in
/// different categories because the vocabularies differ per input grammar.
#[test]
fn test_parsers_use_separate_vocabularies() {
    let message = MessageParser::new().unwrap();
    let sms = SmsParser::new().unwrap();

    // "zomato" is an SMS-vocabulary food keyword, not a typed-note one
    let typed = message.parse("$12 zomato").unwrap();
    assert_eq!(typed.category, "other");

    let notified = sms.parse("Rs 12 debited at Zomato").unwrap();
    assert_eq!(notified.category, "food");
}

#[test]
fn test_payment_detection_composes_with_parsing() {
    let message = MessageParser::new().unwrap();
    let text = "Spent $40 on groceries, paid via gpay";

    let draft = message.parse(text).unwrap();
    assert_eq!(draft.amount, 40.0);

    let method = detect_payment_method(text).unwrap();
    assert_eq!(method.method, PaymentMethod::Upi);
    assert_eq!(method.confidence, 0.9);
}

/// The lexicon must resolve anything a draft can carry, including the
/// direction fallbacks and arbitrary persisted identifiers.
#[test]
fn test_lexicon_covers_all_parser_outputs() {
    for id in [
        "food", "transport", "entertainment", "bills", "shopping", "health", "fuel", "salary",
        "freelance", "bonus", "investment", "rental income", "refund", "other", "other income",
    ] {
        let info = category_info(id);
        assert!(!info.name.is_empty());
        assert!(!info.icon.is_empty());
        assert!(info.color.starts_with('#'));
    }

    // Unrecognized inputs still resolve
    assert_eq!(category_info("d41d8cd98f00b204e9800998").name, "Other");
    assert_eq!(category_info("tea time").name, "Tea Time");
}

#[test]
fn test_similarity_groups_align_with_categories() {
    let group = similar_categories("food");
    assert!(group.contains(&"restaurant"));
    // Each suggested keyword resolves in the lexicon too (possibly to a
    // title-cased best-effort label)
    for keyword in group {
        assert!(!category_info(keyword).name.is_empty());
    }
}

#[test]
fn test_drafts_serialize_for_downstream() {
    let sms = SmsParser::new().unwrap();
    let draft = sms.parse("Rs 450 debited at Swiggy via UPI").unwrap();

    let json = serde_json::to_string(&draft).unwrap();
    assert!(json.contains("\"kind\":\"expense\""));
    assert!(json.contains("\"amount\":450.0"));

    let back: finch_core::TransactionDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);
}

#[test]
fn test_gate_is_pure_prefilter() {
    // Gate acceptance does not imply a draft...
    assert!(is_bank_message("bank holiday notice", "VM-HDFCBK"));
    let router = InboundRouter::new().unwrap();
    assert!(router.on_raw_message("bank holiday notice", "VM-HDFCBK").is_none());

    // ...and gate rejection always means no draft, amount or not.
    assert!(!is_bank_message("give me 500 by friday", "Bob"));
    assert!(router.on_raw_message("give me 500 by friday", "Bob").is_none());
}
