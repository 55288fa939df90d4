//! Bank-SMS commands

use anyhow::{Context, Result};
use finch_core::{is_bank_message, InboundRouter};

use super::{describe_draft, DraftRecord};

pub fn cmd_sms(body: &str, sender: &str, json: bool) -> Result<()> {
    let router = InboundRouter::new().context("Failed to build inbound router")?;

    // Report gate rejections distinctly from parse misses
    if !is_bank_message(body, sender) {
        if json {
            println!("null");
        } else {
            println!("🚫 Not a bank message (gate rejected sender and body)");
        }
        return Ok(());
    }

    match router.on_raw_message(body, sender) {
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
                println!("🤷 Bank message, but no positive amount found");
            }
        }
    }

    Ok(())
}
