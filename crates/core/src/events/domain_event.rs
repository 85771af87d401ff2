//! Dashboard event types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Events emitted by the dashboard store after a snapshot was replaced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// Monthly income changed; totals were recomputed.
    IncomeChanged { monthly_income: Decimal },

    /// Allocation percentage changed; the overview is unchanged.
    AllocationChanged { percentage: Decimal },

    /// A debt record was replaced.
    DebtUpdated { debt_id: String },

    /// A new debt was added to the collection.
    DebtAdded { debt_id: String },

    /// A payment was recorded against a debt.
    PaymentRecorded {
        debt_id: String,
        date: NaiveDate,
        amount: Decimal,
    },
}

impl DashboardEvent {
    pub fn income_changed(monthly_income: Decimal) -> Self {
        Self::IncomeChanged { monthly_income }
    }

    pub fn allocation_changed(percentage: Decimal) -> Self {
        Self::AllocationChanged { percentage }
    }

    pub fn debt_updated(debt_id: impl Into<String>) -> Self {
        Self::DebtUpdated {
            debt_id: debt_id.into(),
        }
    }

    pub fn debt_added(debt_id: impl Into<String>) -> Self {
        Self::DebtAdded {
            debt_id: debt_id.into(),
        }
    }

    pub fn payment_recorded(debt_id: impl Into<String>, date: NaiveDate, amount: Decimal) -> Self {
        Self::PaymentRecorded {
            debt_id: debt_id.into(),
            date,
            amount,
        }
    }

    /// The debt this event concerns, if any.
    pub fn debt_id(&self) -> Option<&str> {
        match self {
            Self::DebtUpdated { debt_id }
            | Self::DebtAdded { debt_id }
            | Self::PaymentRecorded { debt_id, .. } => Some(debt_id),
            Self::IncomeChanged { .. } | Self::AllocationChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = DashboardEvent::debt_added("debt-1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "debt_added");
        assert_eq!(json["debt_id"], "debt-1");

        let event = DashboardEvent::payment_recorded(
            "debt-1",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            dec!(100),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "payment_recorded");
        assert_eq!(json["date"], "2024-03-01");
    }

    #[test]
    fn test_debt_id_accessor() {
        assert_eq!(DashboardEvent::debt_updated("x").debt_id(), Some("x"));
        assert_eq!(DashboardEvent::income_changed(dec!(1)).debt_id(), None);
    }
}
