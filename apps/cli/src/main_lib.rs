use std::sync::Arc;

use anyhow::Context;
use debtboard_core::utils::parse_amount;
use debtboard_core::{
    load_snapshot_from_path, save_snapshot_to_path, DashboardServiceTrait, DashboardSnapshot,
    DashboardStore, NewDebtInput, PaymentInput,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Loads the snapshot, applies the requested command and renders the result as JSON.
pub fn run(config: &Config, cli: &Cli) -> anyhow::Result<String> {
    let snapshot = load_snapshot_from_path(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    tracing::info!("Snapshot loaded from {}", config.data_path.display());
    let store = DashboardStore::with_defaults(snapshot)
        .with_context(|| format!("reconciling {}", config.data_path.display()))?;

    let result = apply_command(&store, &cli.command)?;

    if cli.write && result.is_some() {
        save_snapshot_to_path(&store.snapshot(), &config.data_path)
            .with_context(|| format!("writing {}", config.data_path.display()))?;
        tracing::info!("Snapshot written to {}", config.data_path.display());
    }

    let output = match (&cli.command, result) {
        (Command::Advisor, _) => serde_json::to_string_pretty(&store.advisor_context())?,
        (_, Some(snapshot)) => serde_json::to_string_pretty(&*snapshot)?,
        (_, None) => serde_json::to_string_pretty(&*store.snapshot())?,
    };
    Ok(output)
}

/// Applies a mutating command. Read-only commands return `None`.
fn apply_command(
    store: &DashboardStore,
    command: &Command,
) -> anyhow::Result<Option<Arc<DashboardSnapshot>>> {
    let snapshot = match command {
        Command::Show | Command::Advisor => return Ok(None),
        Command::SetIncome { amount } => {
            store.set_monthly_income(parse_amount("monthlyIncome", amount)?)?
        }
        Command::SetAllocation { percentage } => store.set_allocated_income_percentage(
            parse_amount("allocatedIncomePercentage", percentage)?,
        )?,
        Command::AddDebt(args) => store.add_debt(NewDebtInput {
            lender_name: args.lender.clone(),
            debt_type: args.debt_type.clone(),
            interest_rate: args.interest_rate.clone(),
            minimum_payment: args.minimum_payment.clone(),
            original_debt: args.original_debt.clone(),
            loan_term_months: args.loan_term_months.clone(),
            credit_limit: args.credit_limit.clone(),
        })?,
        Command::Pay {
            debt_id,
            amount,
            date,
        } => store.record_payment(debt_id, PaymentInput::parse(date.as_deref(), amount)?)?,
    };
    Ok(Some(snapshot))
}
