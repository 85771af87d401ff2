//! Debt domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::history::{BalanceHistory, HistoryPoint};
use crate::utils::{
    checked_add_amount, ensure_non_negative, parse_history_date, parse_non_negative_amount,
    parse_optional_amount, parse_optional_term_months, progress_percentage,
};

/// A single payment made against a debt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Domain model representing one tracked liability.
///
/// `amount_paid + remaining_debt == original_debt` is expected for records
/// produced by this crate but is not enforced on loaded data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub lender_name: String,
    #[serde(rename = "type")]
    pub debt_type: String,
    pub original_debt: Decimal,
    pub remaining_debt: Decimal,
    pub amount_paid: Decimal,
    pub percentage_completed: Decimal,
    pub interest_rate: Decimal,
    pub minimum_payment: Decimal,
    /// Append-only, in insertion order (not necessarily date order).
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_term_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_balance_history: Option<Vec<HistoryPoint>>,
}

impl Debt {
    /// Date of the most recently appended payment, if any.
    pub fn latest_payment_date(&self) -> Option<NaiveDate> {
        self.payment_history.last().map(|payment| payment.date)
    }

    /// Returns the debt with `percentage_completed` derived from its amounts.
    pub fn with_recomputed_progress(mut self) -> Self {
        self.percentage_completed = progress_percentage(self.amount_paid, self.original_debt);
        self
    }

    /// Builds the debt that results from applying `payment`.
    ///
    /// The payment must be positive and may not exceed the remaining balance.
    /// The debt's own balance history gets a point for the payment date.
    pub fn apply_payment(&self, payment: PaymentRecord) -> Result<Debt> {
        if payment.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Payment amount must be positive, got {}",
                payment.amount
            ))
            .into());
        }
        if payment.amount > self.remaining_debt {
            return Err(ValidationError::InvalidInput(format!(
                "Payment of {} exceeds remaining balance of {} for debt '{}'",
                payment.amount, self.remaining_debt, self.id
            ))
            .into());
        }

        let mut updated = self.clone();
        updated.remaining_debt -= payment.amount;
        updated.amount_paid =
            checked_add_amount("amountPaid", updated.amount_paid, payment.amount)?;
        updated.payment_history.push(payment);

        let mut balance_history =
            BalanceHistory::from_points(updated.debt_balance_history.take().unwrap_or_default());
        balance_history.record(HistoryPoint::new(payment.date, updated.remaining_debt));
        updated.debt_balance_history = Some(balance_history.into_points());

        Ok(updated.with_recomputed_progress())
    }
}

/// Raw input for creating a new debt, as submitted by the add-debt form.
///
/// Numeric fields arrive as text and are validated by [`NewDebtInput::into_debt`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewDebtInput {
    pub lender_name: String,
    #[serde(rename = "type")]
    pub debt_type: String,
    pub interest_rate: String,
    pub minimum_payment: String,
    pub original_debt: String,
    pub loan_term_months: Option<String>,
    pub credit_limit: Option<String>,
}

impl NewDebtInput {
    /// Validates the input and builds a fresh, unpaid debt with the given id.
    pub fn into_debt(self, id: String) -> Result<Debt> {
        let lender_name = required_text("lenderName", self.lender_name)?;
        let debt_type = required_text("type", self.debt_type)?;
        let interest_rate = parse_non_negative_amount("interestRate", &self.interest_rate)?;
        let minimum_payment = parse_non_negative_amount("minimumPayment", &self.minimum_payment)?;
        let original_debt = parse_non_negative_amount("originalDebt", &self.original_debt)?;

        Ok(Debt {
            id,
            lender_name,
            debt_type,
            original_debt,
            remaining_debt: original_debt,
            amount_paid: Decimal::ZERO,
            percentage_completed: Decimal::ZERO,
            interest_rate,
            minimum_payment,
            payment_history: Vec::new(),
            loan_term_months: parse_optional_term_months(self.loan_term_months.as_deref()),
            credit_limit: parse_optional_amount(self.credit_limit.as_deref()),
            debt_balance_history: None,
        })
    }
}

fn required_text(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(trimmed.to_string())
}

/// A payment to record against an existing debt.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// Payment date; `None` means today.
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
}

impl PaymentInput {
    /// Parses text inputs from a payment form.
    pub fn parse(date: Option<&str>, amount: &str) -> Result<Self> {
        let amount = parse_non_negative_amount("amount", amount)?;
        let date = match date {
            Some(raw) if !raw.trim().is_empty() => Some(parse_history_date("date", raw)?),
            _ => None,
        };
        Ok(Self { date, amount })
    }

    /// Resolves the payment into a record, stamping `today` when no date was given.
    pub fn into_record(self, today: NaiveDate) -> Result<PaymentRecord> {
        ensure_non_negative("amount", self.amount)?;
        Ok(PaymentRecord {
            date: self.date.unwrap_or(today),
            amount: self.amount,
        })
    }
}
