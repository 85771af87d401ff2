use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::history::HistoryPoint;

/// Aggregate summary derived from the full debt collection.
///
/// Numeric fields are rounded to two decimals. The balance history holds at
/// most one point per date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_debt_left: Decimal,
    pub total_debt_paid: Decimal,
    pub total_original_debt: Decimal,
    pub overall_progress_percentage: Decimal,
    #[serde(default)]
    pub debt_balance_history: Vec<HistoryPoint>,
}
