//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use coopbooks_shared::types::{Currency, PreviousNetIncome};

#[derive(Parser, Debug)]
#[command(name = "coopbooks")]
#[command(version)]
#[command(about = "Balance sheet and trial balance reports for cooperative ledgers", long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over `config/default` and `config/{RUN_MODE}`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two-period balance sheet
    BalanceSheet(BalanceSheetArgs),
    /// Trial balance for a single date
    TrialBalance(TrialBalanceArgs),
}

#[derive(Args, Debug)]
pub struct BalanceSheetArgs {
    /// Current period end date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "current_file")]
    pub end_date: Option<NaiveDate>,

    /// Previous period end date; defaults to 31 December of the prior year
    #[arg(long)]
    pub previous_end_date: Option<NaiveDate>,

    /// Read the current snapshot from a JSON file instead of the service
    #[arg(long, conflicts_with = "end_date")]
    pub current_file: Option<PathBuf>,

    /// Read the previous snapshot from a JSON file; empty when omitted
    #[arg(long, requires = "current_file", conflicts_with = "previous_end_date")]
    pub previous_file: Option<PathBuf>,

    /// How the previous period's net income is derived (zeroed, computed)
    #[arg(long)]
    pub previous_net_income: Option<PreviousNetIncome>,

    /// Currency used to render amounts (IDR, USD, SGD)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TrialBalanceArgs {
    /// End date (YYYY-MM-DD)
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub end_date: Option<NaiveDate>,

    /// Read the snapshot from a JSON file instead of the service
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Currency used to render amounts (IDR, USD, SGD)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON document
    Json,
}
