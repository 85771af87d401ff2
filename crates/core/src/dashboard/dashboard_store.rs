//! In-memory dashboard store.

use log::debug;
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock};

use super::dashboard_model::DashboardSnapshot;
use super::dashboard_traits::{DashboardServiceTrait, IdGenerator};
use super::id_generator::UuidIdGenerator;
use crate::debts::{Debt, NewDebtInput, PaymentInput};
use crate::errors::{Error, Result};
use crate::events::{DashboardEvent, DashboardEventSink, NoOpDashboardEventSink};
use crate::overview::compute_overview;
use crate::utils::{ensure_non_negative, today};

/// Holds the canonical [`DashboardSnapshot`] and applies commands to it.
///
/// Commands run one at a time under the write lock. Each builds a complete
/// new snapshot from the current one and swaps it in only on success, so a
/// reader holding an earlier `Arc` never sees a partially applied command.
pub struct DashboardStore {
    snapshot: RwLock<Arc<DashboardSnapshot>>,
    id_generator: Arc<dyn IdGenerator>,
    event_sink: Arc<dyn DashboardEventSink>,
}

impl DashboardStore {
    /// Creates a store from an initial snapshot, re-deriving its computed fields.
    ///
    /// Fails when the snapshot's totals cannot be represented.
    pub fn new(
        initial: DashboardSnapshot,
        id_generator: Arc<dyn IdGenerator>,
        event_sink: Arc<dyn DashboardEventSink>,
    ) -> Result<Self> {
        let initial = initial.reconciled()?;
        debug!(
            "Dashboard store initialized with {} debts, {} history points",
            initial.debts.len(),
            initial.dashboard_overview.debt_balance_history.len()
        );
        Ok(Self {
            snapshot: RwLock::new(Arc::new(initial)),
            id_generator,
            event_sink,
        })
    }

    /// Store with UUID ids and no event sink.
    pub fn with_defaults(initial: DashboardSnapshot) -> Result<Self> {
        Self::new(
            initial,
            Arc::new(UuidIdGenerator),
            Arc::new(NoOpDashboardEventSink),
        )
    }

    /// Runs one command: computes the next snapshot from the current one,
    /// swaps it in, then emits the command's event.
    fn apply<F>(&self, command: &str, transition: F) -> Result<Arc<DashboardSnapshot>>
    where
        F: FnOnce(&DashboardSnapshot) -> Result<(DashboardSnapshot, DashboardEvent)>,
    {
        // The guarded value is only ever replaced by a finished snapshot, so
        // a poisoned lock still holds a consistent one.
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);

        let (next, event) = match transition(&**guard) {
            Ok(result) => result,
            Err(e) => {
                debug!("Command {} rejected: {}", command, e);
                return Err(e);
            }
        };

        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        drop(guard);

        debug!("Command {} applied", command);
        self.event_sink.emit(event);
        Ok(next)
    }

    /// New snapshot with `updated_debt` in place of the debt sharing its id.
    fn replace_debt(current: &DashboardSnapshot, updated_debt: Debt) -> Result<DashboardSnapshot> {
        let position = current
            .debts
            .iter()
            .position(|debt| debt.id == updated_debt.id)
            .ok_or_else(|| Error::DebtNotFound(updated_debt.id.clone()))?;

        let debt_id = updated_debt.id.clone();
        let mut debts = current.debts.clone();
        debts[position] = updated_debt.with_recomputed_progress();

        let dashboard_overview = compute_overview(
            &debts,
            &current.dashboard_overview.debt_balance_history,
            Some(&debt_id),
        )?;

        Ok(DashboardSnapshot {
            user_profile: current.user_profile.clone(),
            debts,
            dashboard_overview,
        })
    }
}

impl DashboardServiceTrait for DashboardStore {
    fn snapshot(&self) -> Arc<DashboardSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn set_monthly_income(&self, monthly_income: Decimal) -> Result<Arc<DashboardSnapshot>> {
        self.apply("set_monthly_income", |current| {
            ensure_non_negative("monthlyIncome", monthly_income)?;

            let dashboard_overview = compute_overview(
                &current.debts,
                &current.dashboard_overview.debt_balance_history,
                None,
            )?;
            let next = DashboardSnapshot {
                user_profile: current.user_profile.with_monthly_income(monthly_income)?,
                debts: current.debts.clone(),
                dashboard_overview,
            };
            Ok((next, DashboardEvent::income_changed(monthly_income)))
        })
    }

    fn set_allocated_income_percentage(
        &self,
        percentage: Decimal,
    ) -> Result<Arc<DashboardSnapshot>> {
        self.apply("set_allocated_income_percentage", |current| {
            let next = DashboardSnapshot {
                user_profile: current.user_profile.with_allocated_percentage(percentage)?,
                debts: current.debts.clone(),
                dashboard_overview: current.dashboard_overview.clone(),
            };
            Ok((next, DashboardEvent::allocation_changed(percentage)))
        })
    }

    fn update_debt(&self, updated_debt: Debt) -> Result<Arc<DashboardSnapshot>> {
        self.apply("update_debt", |current| {
            let event = DashboardEvent::debt_updated(updated_debt.id.as_str());
            let next = Self::replace_debt(current, updated_debt)?;
            Ok((next, event))
        })
    }

    fn add_debt(&self, input: NewDebtInput) -> Result<Arc<DashboardSnapshot>> {
        self.apply("add_debt", |current| {
            let debt = input.into_debt(self.id_generator.generate())?;
            if current.find_debt(&debt.id).is_some() {
                return Err(Error::Unexpected(format!(
                    "Id generator produced an existing debt id '{}'",
                    debt.id
                )));
            }

            let event = DashboardEvent::debt_added(debt.id.as_str());
            let mut debts = current.debts.clone();
            debts.push(debt);

            let dashboard_overview = compute_overview(
                &debts,
                &current.dashboard_overview.debt_balance_history,
                None,
            )?;
            let next = DashboardSnapshot {
                user_profile: current.user_profile.clone(),
                debts,
                dashboard_overview,
            };
            Ok((next, event))
        })
    }

    fn record_payment(
        &self,
        debt_id: &str,
        payment: PaymentInput,
    ) -> Result<Arc<DashboardSnapshot>> {
        self.apply("record_payment", |current| {
            let debt = current
                .find_debt(debt_id)
                .ok_or_else(|| Error::DebtNotFound(debt_id.to_string()))?;
            let record = payment.into_record(today())?;
            let updated_debt = debt.apply_payment(record)?;

            let next = Self::replace_debt(current, updated_debt)?;
            Ok((
                next,
                DashboardEvent::payment_recorded(debt_id, record.date, record.amount),
            ))
        })
    }
}
