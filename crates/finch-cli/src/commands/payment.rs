//! Payment-method commands

use anyhow::Result;
use finch_core::{detect_payment_method, payment_method_suggestions};

pub fn cmd_payment(text: &str, suggest: bool, json: bool) -> Result<()> {
    if suggest {
        let suggestions = payment_method_suggestions(text);
        if json {
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        } else if suggestions.is_empty() {
            println!("🤷 No payment methods relate to '{}'", text);
        } else {
            println!("💡 Suggestions for '{}':", text);
            for s in &suggestions {
                println!("   {} ({:.0}%)", s.suggestion, s.confidence * 100.0);
            }
        }
        return Ok(());
    }

    match detect_payment_method(text) {
        Some(m) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&m)?);
            } else {
                println!(
                    "💳 {} ({:.0}% confidence)",
                    m.suggestion,
                    m.confidence * 100.0
                );
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("🤷 No payment method mentioned");
            }
        }
    }

    Ok(())
}
