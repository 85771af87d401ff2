//! Balance history - dated snapshots of remaining debt.

mod balance_history;
mod history_model;

pub use balance_history::BalanceHistory;
pub use history_model::HistoryPoint;
