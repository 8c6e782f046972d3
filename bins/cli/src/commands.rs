//! Command implementations.

use std::io::Write;

use anyhow::Context;
use tracing::{info, warn};

use coopbooks_client::TrialBalanceClient;
use coopbooks_core::reports::{
    PreviousNetIncome, ReportPeriod, ReportService, TrialBalanceTotals, ValidatedTrialBalance,
};
use coopbooks_shared::types::Currency;
use coopbooks_shared::{AppConfig, AppError};

use crate::cli::{BalanceSheetArgs, OutputFormat, TrialBalanceArgs};
use crate::render::{BalanceSheetReport, TrialBalanceReport};
use crate::snapshot::load_snapshot;

/// Configuration available to a command.
///
/// Reading snapshots from files works without a configured service, so a
/// missing configuration is only an error once the service is needed.
pub struct CommandContext {
    /// Loaded configuration, or the reason it could not be loaded.
    pub config: Result<AppConfig, String>,
}

impl CommandContext {
    fn config(&self) -> anyhow::Result<&AppConfig> {
        match &self.config {
            Ok(config) => Ok(config),
            Err(reason) => Err(anyhow::Error::new(AppError::Config(reason.clone()))
                .context("The accounting service is not configured")),
        }
    }

    fn client(&self) -> anyhow::Result<TrialBalanceClient> {
        let config = self.config()?;
        TrialBalanceClient::new(&config.api).map_err(|e| AppError::from(e).into())
    }

    fn previous_net_income(&self, flag: Option<PreviousNetIncome>) -> PreviousNetIncome {
        flag.or_else(|| {
            self.config
                .as_ref()
                .ok()
                .map(|c| c.report.previous_net_income)
        })
        .unwrap_or_default()
    }

    fn currency(&self, flag: Option<Currency>) -> Currency {
        flag.or_else(|| self.config.as_ref().ok().map(|c| c.report.currency))
            .unwrap_or_default()
    }
}

fn print(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(AppError::from)?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    text.push('\n');
    print(&text)
}

async fn fetch_snapshots(
    ctx: &CommandContext,
    args: &BalanceSheetArgs,
) -> anyhow::Result<(ValidatedTrialBalance, ValidatedTrialBalance)> {
    if let Some(current_file) = &args.current_file {
        let current = load_snapshot(current_file)?;
        let previous = match &args.previous_file {
            Some(path) => load_snapshot(path)?,
            None => {
                warn!("No previous snapshot given; previous figures will be zero");
                ValidatedTrialBalance {
                    accounts: Vec::new(),
                    totals: TrialBalanceTotals::from_accounts(&[]),
                    end_date: args.previous_end_date,
                    warnings: Vec::new(),
                }
            }
        };
        return Ok((current, previous));
    }

    let end_date = args
        .end_date
        .ok_or_else(|| AppError::Validation("--end-date is required".to_string()))?;
    let period = ReportPeriod::new(end_date, args.previous_end_date)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let snapshots = ctx
        .client()?
        .fetch_period(period)
        .await
        .map_err(AppError::from)
        .context("Failed to fetch trial balances")?;

    Ok((snapshots.current, snapshots.previous))
}

/// `balance-sheet` command.
pub async fn balance_sheet(ctx: &CommandContext, args: BalanceSheetArgs) -> anyhow::Result<()> {
    let (current, previous) = fetch_snapshots(ctx, &args).await?;
    let mode = ctx.previous_net_income(args.previous_net_income);

    let balance_sheet = ReportService::build_balance_sheet(&current.accounts, &previous.accounts);
    let net_income =
        ReportService::net_income_for_periods(&current.accounts, &previous.accounts, mode);
    let statement = ReportService::assemble_statement(&balance_sheet, net_income);

    if mode == PreviousNetIncome::Zeroed {
        info!("Previous period net income is reported as zero (previous_net_income = zeroed)");
    }
    if !statement.is_balanced_current {
        warn!(
            assets = %statement.total_assets.current,
            liabilities_and_equity = %statement.liabilities_and_equity.current,
            "Current period balance sheet does not balance"
        );
    }

    let report = BalanceSheetReport {
        end_date: current.end_date.or(args.end_date),
        previous_end_date: previous.end_date,
        currency: ctx.currency(args.currency),
        previous_net_income: mode,
        balance_sheet,
        statement,
    };

    match args.format {
        OutputFormat::Text => print(&report.to_string()),
        OutputFormat::Json => print_json(&report),
    }
}

/// `trial-balance` command.
pub async fn trial_balance(ctx: &CommandContext, args: TrialBalanceArgs) -> anyhow::Result<()> {
    let snapshot = match (&args.file, args.end_date) {
        (Some(path), _) => load_snapshot(path)?,
        (None, Some(end_date)) => ctx
            .client()?
            .fetch_trial_balance(end_date)
            .await
            .map_err(AppError::from)
            .context("Failed to fetch trial balance")?,
        (None, None) => {
            return Err(AppError::Validation("--end-date or --file is required".to_string()).into());
        }
    };

    let report = TrialBalanceReport::new(snapshot, ctx.currency(args.currency));

    match args.format {
        OutputFormat::Text => print(&report.to_string()),
        OutputFormat::Json => print_json(&report),
    }
}
