use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Remaining balance recorded on a given date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub remaining_debt: Decimal,
}

impl HistoryPoint {
    pub fn new(date: NaiveDate, remaining_debt: Decimal) -> Self {
        Self {
            date,
            remaining_debt,
        }
    }
}
