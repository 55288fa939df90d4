//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use clap::{Parser, Subcommand};

/// finch - Turn transaction text into structured records
#[derive(Parser)]
#[command(name = "finch")]
#[command(about = "Parse typed notes and bank SMS into transaction drafts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a typed natural-language message
    Parse {
        /// Message text, e.g. "Spent $25 on lunch"
        text: Option<String>,

        /// Read one message per line from stdin instead
        #[arg(long)]
        stdin: bool,
    },

    /// Run a bank SMS through the gate and parser
    Sms {
        /// Message body
        body: String,

        /// Sender identifier, e.g. VM-HDFCBK
        #[arg(short, long, default_value = "")]
        sender: String,
    },

    /// Detect the payment method mentioned in text
    Payment {
        /// Message text or partial input
        text: String,

        /// List ranked suggestions for a partial input instead of detecting
        #[arg(long)]
        suggest: bool,
    },

    /// Category lexicon lookups
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Show display metadata for a category identifier
    Info {
        /// Category identifier (name or legacy numeric key)
        id: String,
    },

    /// List keywords related to a category name
    Similar {
        /// Category name or keyword
        name: String,
    },
}
