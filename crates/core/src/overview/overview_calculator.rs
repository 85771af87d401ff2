use log::{debug, warn};
use rust_decimal::Decimal;

use super::DashboardOverview;
use crate::debts::Debt;
use crate::errors::Result;
use crate::history::{BalanceHistory, HistoryPoint};
use crate::utils::{checked_add_amount, progress_percentage, round_display};

/// Folds the debt collection into a [`DashboardOverview`].
///
/// The balance history is threaded forward from `prior_history`. When
/// `changed_debt_id` names a debt, a point `{date, total remaining}` is
/// recorded under the date of that debt's most recently appended payment.
/// If the id is unknown or the debt has no payments, no point is recorded
/// and a warning is logged. The history is always collapsed so that each
/// date appears once, keeping the last value written for it.
///
/// Fails with `AmountOverflow` when a total leaves the `Decimal` range.
///
/// # Arguments
///
/// * `debts` - The full current debt collection.
/// * `prior_history` - The previously accumulated aggregate history.
/// * `changed_debt_id` - The debt that was just updated, if any.
///
pub fn compute_overview(
    debts: &[Debt],
    prior_history: &[HistoryPoint],
    changed_debt_id: Option<&str>,
) -> Result<DashboardOverview> {
    let mut total_debt_left = Decimal::ZERO;
    let mut total_debt_paid = Decimal::ZERO;
    let mut total_original_debt = Decimal::ZERO;

    for debt in debts {
        total_debt_left =
            checked_add_amount("totalDebtLeft", total_debt_left, debt.remaining_debt)?;
        total_debt_paid =
            checked_add_amount("totalDebtPaid", total_debt_paid, debt.amount_paid)?;
        total_original_debt =
            checked_add_amount("totalOriginalDebt", total_original_debt, debt.original_debt)?;
    }

    let total_debt_left = round_display(total_debt_left);
    let mut history = BalanceHistory::from_points(prior_history.iter().copied());

    if let Some(debt_id) = changed_debt_id {
        match debts.iter().find(|debt| debt.id == debt_id) {
            Some(debt) => match debt.latest_payment_date() {
                Some(date) => history.record(HistoryPoint::new(date, total_debt_left)),
                None => warn!(
                    "Debt {} has no payment history; balance history point skipped",
                    debt_id
                ),
            },
            None => warn!(
                "Changed debt {} not found among {} debts; balance history point skipped",
                debt_id,
                debts.len()
            ),
        }
    }

    let overview = DashboardOverview {
        total_debt_left,
        total_debt_paid: round_display(total_debt_paid),
        total_original_debt: round_display(total_original_debt),
        overall_progress_percentage: progress_percentage(total_debt_paid, total_original_debt),
        debt_balance_history: history.into_points(),
    };

    debug!(
        "Overview recomputed over {} debts: left={}, paid={}, original={}, progress={}%",
        debts.len(),
        overview.total_debt_left,
        overview.total_debt_paid,
        overview.total_original_debt,
        overview.overall_progress_percentage
    );

    Ok(overview)
}
