//! Dashboard snapshot models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::debts::Debt;
use crate::errors::Result;
use crate::overview::{compute_overview, DashboardOverview};
use crate::profile::UserProfile;

/// Complete, consistent state of the dashboard at one instant.
///
/// `dashboard_overview` is always the calculator's output over `debts`.
/// Snapshots are replaced as a whole, never edited in place by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub dashboard_overview: DashboardOverview,
}

impl DashboardSnapshot {
    /// Re-derives every computed field of a loaded snapshot.
    ///
    /// The allocated income amount and each debt's completion percentage
    /// are recomputed, and the overview is rebuilt on top of the stored
    /// balance history without recording a new point. Fails when a derived
    /// figure leaves the `Decimal` range.
    pub fn reconciled(self) -> Result<Self> {
        let debts: Vec<Debt> = self
            .debts
            .into_iter()
            .map(Debt::with_recomputed_progress)
            .collect();
        let dashboard_overview =
            compute_overview(&debts, &self.dashboard_overview.debt_balance_history, None)?;
        Ok(Self {
            user_profile: self.user_profile.normalized()?,
            debts,
            dashboard_overview,
        })
    }

    pub fn find_debt(&self, debt_id: &str) -> Option<&Debt> {
        self.debts.iter().find(|debt| debt.id == debt_id)
    }

    /// Read-only projection handed to the repayment advice chat.
    pub fn advisor_context(&self) -> AdvisorContext {
        AdvisorContext {
            monthly_income: self.user_profile.monthly_income,
            allocated_income_percentage: self.user_profile.allocated_income_percentage,
            total_debt_left: self.dashboard_overview.total_debt_left,
            total_original_debt: self.dashboard_overview.total_original_debt,
        }
    }
}

/// Figures the advice chat needs to suggest a repayment plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorContext {
    pub monthly_income: Decimal,
    pub allocated_income_percentage: Decimal,
    pub total_debt_left: Decimal,
    pub total_original_debt: Decimal,
}
