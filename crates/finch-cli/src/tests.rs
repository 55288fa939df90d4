//! CLI command tests
//!
//! Command functions print to stdout; these tests mainly check that they
//! run cleanly on representative inputs and that the record enrichment
//! behaves.

use finch_core::{MessageParser, TransactionKind};

use crate::commands::{self, describe_draft, DraftRecord};

#[test]
fn test_cmd_parse_recognized() {
    assert!(commands::cmd_parse(Some("Spent $25 on lunch"), false, false).is_ok());
    assert!(commands::cmd_parse(Some("Spent $25 on lunch"), false, true).is_ok());
}

#[test]
fn test_cmd_parse_unrecognized() {
    assert!(commands::cmd_parse(Some("no numbers here"), false, false).is_ok());
    assert!(commands::cmd_parse(Some("no numbers here"), false, true).is_ok());
}

#[test]
fn test_cmd_parse_requires_text_without_stdin() {
    assert!(commands::cmd_parse(None, false, false).is_err());
}

#[test]
fn test_parse_batch_counts_accepted_and_skipped() {
    use std::io::Cursor;

    let parser = MessageParser::new().unwrap();
    let input = Cursor::new(
        "Spent $25 on lunch\n\
         \n\
         no numbers here\n\
         Earned $500 from freelance work\n",
    );

    let (accepted, skipped) = commands::parse::parse_batch(&parser, input).unwrap();
    assert_eq!(accepted.len(), 2);
    assert_eq!(skipped, 1);
    assert_eq!(accepted[0].draft.category, "food");
    assert_eq!(accepted[1].draft.category, "freelance");
}

#[test]
fn test_cmd_sms_paths() {
    // Gate rejection, parse miss, and success all return Ok
    assert!(commands::cmd_sms("see you tonight", "Mom", false).is_ok());
    assert!(commands::cmd_sms("bank branch closed Monday", "VM-HDFCBK", false).is_ok());
    assert!(commands::cmd_sms("Rs 450 debited at Swiggy", "VM-HDFCBK", true).is_ok());
}

#[test]
fn test_cmd_payment_paths() {
    assert!(commands::cmd_payment("paid via gpay", false, false).is_ok());
    assert!(commands::cmd_payment("nothing relevant", false, true).is_ok());
    assert!(commands::cmd_payment("pa", true, false).is_ok());
}

#[test]
fn test_cmd_category_paths() {
    assert!(commands::cmd_category_info("food", false).is_ok());
    assert!(commands::cmd_category_info("", true).is_ok());
    assert!(commands::cmd_category_similar("lunch", false).is_ok());
    assert!(commands::cmd_category_similar("astrology", true).is_ok());
}

#[test]
fn test_record_enrichment_stamps_today() {
    let draft = MessageParser::new()
        .unwrap()
        .parse("Spent $25 on lunch")
        .unwrap();
    let record = DraftRecord::today(draft.clone());

    assert_eq!(record.draft, draft);
    assert_eq!(record.date, chrono::Local::now().date_naive());

    // The flattened JSON carries both draft fields and the date
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"kind\":\"expense\""));
    assert!(json.contains("\"date\":"));
}

#[test]
fn test_describe_draft_format() {
    let draft = MessageParser::new()
        .unwrap()
        .parse("Spent $25 on lunch")
        .unwrap();
    let line = describe_draft(&draft);

    assert!(line.contains("expense"));
    assert!(line.contains("25.00"));
    assert!(line.contains("food"));
    assert!(line.contains("Lunch"));
    assert_eq!(draft.kind, TransactionKind::Expense);
}
