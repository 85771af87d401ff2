use std::sync::Arc;

use rust_decimal::Decimal;

use super::dashboard_model::{AdvisorContext, DashboardSnapshot};
use crate::debts::{Debt, NewDebtInput, PaymentInput};
use crate::errors::Result;

/// Source of unique identifiers for newly created debts.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Trait for dashboard store operations.
///
/// Each command is atomic: it either replaces the snapshot with a new
/// consistent one and returns it, or fails and leaves the current snapshot
/// untouched.
pub trait DashboardServiceTrait: Send + Sync {
    /// The current snapshot. Holding the `Arc` keeps that version alive
    /// regardless of later commands.
    fn snapshot(&self) -> Arc<DashboardSnapshot>;

    /// Sets the monthly income, re-deriving the allocated amount and the
    /// overview totals. No balance history point is recorded.
    ///
    /// Fails with a validation error for a negative income.
    fn set_monthly_income(&self, monthly_income: Decimal) -> Result<Arc<DashboardSnapshot>>;

    /// Sets the allocation percentage. The overview is carried over as is.
    /// The value is not clamped.
    fn set_allocated_income_percentage(&self, percentage: Decimal)
        -> Result<Arc<DashboardSnapshot>>;

    /// Replaces the debt with the same id and records a balance history
    /// point at the date of its latest payment.
    ///
    /// Fails with `Error::DebtNotFound` when no debt has that id.
    fn update_debt(&self, updated_debt: Debt) -> Result<Arc<DashboardSnapshot>>;

    /// Validates the form input and appends a new, unpaid debt.
    fn add_debt(&self, input: NewDebtInput) -> Result<Arc<DashboardSnapshot>>;

    /// Applies a payment to a debt, then updates it as [`update_debt`](Self::update_debt) does.
    fn record_payment(&self, debt_id: &str, payment: PaymentInput)
        -> Result<Arc<DashboardSnapshot>>;

    /// Projection of the current snapshot for the advice chat.
    fn advisor_context(&self) -> AdvisorContext {
        self.snapshot().advisor_context()
    }
}
