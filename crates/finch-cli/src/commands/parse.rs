//! Free-text parsing commands

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use finch_core::MessageParser;
use tracing::debug;

use super::{describe_draft, DraftRecord};

pub fn cmd_parse(text: Option<&str>, stdin: bool, json: bool) -> Result<()> {
    let parser = MessageParser::new().context("Failed to build message parser")?;

    if stdin {
        return parse_lines(&parser, std::io::stdin().lock(), json);
    }

    let text = match text {
        Some(t) => t,
        None => bail!("Provide message text or use --stdin"),
    };

    match parser.parse(text) {
        Some(draft) => {
            if json {
                let record = DraftRecord::today(draft);
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("✅ {}", describe_draft(&draft));
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("🤷 No transaction recognized (no positive amount found)");
            }
        }
    }

    Ok(())
}

/// Batch mode: one message per line, summary at the end. Lines without a
/// recognizable amount are counted, not errors.
fn parse_lines(parser: &MessageParser, reader: impl BufRead, json: bool) -> Result<()> {
    let (accepted, skipped) = parse_batch(parser, reader)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accepted)?);
    } else {
        for record in &accepted {
            println!("✅ {}", describe_draft(&record.draft));
        }
        println!();
        println!(
            "📋 {} parsed, {} skipped (no amount)",
            accepted.len(),
            skipped
        );
    }

    Ok(())
}

/// Parse every non-empty line, returning the accepted records and the count
/// of lines with no recognizable amount.
pub(crate) fn parse_batch(
    parser: &MessageParser,
    reader: impl BufRead,
) -> Result<(Vec<DraftRecord>, usize)> {
    let mut accepted = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read line from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse(&line) {
            Some(draft) => accepted.push(DraftRecord::today(draft)),
            None => {
                debug!(line = %line, "skipped line with no positive amount");
                skipped += 1;
            }
        }
    }

    Ok((accepted, skipped))
}
