use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "debtboard")]
#[command(version, about = "Track debts and repayment progress", long_about = None)]
pub struct Cli {
    /// Snapshot document to operate on (overrides DEBTBOARD_DATA_PATH)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Write the resulting snapshot back to the data file
    #[arg(long, global = true, default_value_t = false)]
    pub write: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the current snapshot
    Show,
    /// Print the figures shared with the repayment advice chat
    Advisor,
    /// Set the monthly income
    SetIncome {
        /// New monthly income
        amount: String,
    },
    /// Set the share of income allocated to debt repayment
    SetAllocation {
        /// Percentage of monthly income
        percentage: String,
    },
    /// Add a new debt
    AddDebt(AddDebtArgs),
    /// Record a payment against a debt
    Pay {
        /// Id of the debt being paid
        debt_id: String,
        /// Payment amount
        amount: String,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddDebtArgs {
    #[arg(long)]
    pub lender: String,
    #[arg(long = "type")]
    pub debt_type: String,
    #[arg(long)]
    pub interest_rate: String,
    #[arg(long)]
    pub minimum_payment: String,
    #[arg(long)]
    pub original_debt: String,
    #[arg(long)]
    pub loan_term_months: Option<String>,
    #[arg(long)]
    pub credit_limit: Option<String>,
}
