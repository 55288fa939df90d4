//! finch CLI - transaction-text parsing front end
//!
//! Usage:
//!   finch parse "Spent $25 on lunch"      Parse a typed message
//!   finch sms --sender VM-HDFCBK "..."    Gate + parse a bank SMS
//!   finch payment "paid via gpay"         Detect the payment method
//!   finch category info food              Look up category metadata

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Parse { text, stdin } => {
            commands::cmd_parse(text.as_deref(), stdin, cli.json)
        }
        Commands::Sms { body, sender } => commands::cmd_sms(&body, &sender, cli.json),
        Commands::Payment { text, suggest } => commands::cmd_payment(&text, suggest, cli.json),
        Commands::Category { action } => match action {
            CategoryAction::Info { id } => commands::cmd_category_info(&id, cli.json),
            CategoryAction::Similar { name } => commands::cmd_category_similar(&name, cli.json),
        },
    }
}
