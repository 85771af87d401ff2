use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, DISPLAY_ROUNDING, PERCENTAGE_DISPLAY_PRECISION};
use crate::errors::{Result, ValidationError};

/// Income figures for the single dashboard user.
///
/// `allocated_income_amount` is always derived from the other two fields;
/// the setters recompute it so it can never drift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub monthly_income: Decimal,
    pub allocated_income_percentage: Decimal,
    pub allocated_income_amount: Decimal,
}

impl UserProfile {
    /// Fails with `AmountOverflow` when the allocated amount leaves the
    /// `Decimal` range.
    pub fn new(monthly_income: Decimal, allocated_income_percentage: Decimal) -> Result<Self> {
        Ok(Self {
            monthly_income,
            allocated_income_percentage,
            allocated_income_amount: allocated_amount(monthly_income, allocated_income_percentage)?,
        })
    }

    /// Copy of this profile with a new income, keeping the current percentage.
    pub fn with_monthly_income(&self, monthly_income: Decimal) -> Result<Self> {
        Self::new(monthly_income, self.allocated_income_percentage)
    }

    /// Copy of this profile with a new percentage, keeping the current income.
    pub fn with_allocated_percentage(&self, percentage: Decimal) -> Result<Self> {
        Self::new(self.monthly_income, percentage)
    }

    /// Re-derives the allocated amount, e.g. after loading a stored profile.
    pub fn normalized(&self) -> Result<Self> {
        Self::new(self.monthly_income, self.allocated_income_percentage)
    }

    /// Monthly income formatted with two decimals.
    pub fn display_monthly_income(&self) -> String {
        format_fixed(self.monthly_income, DISPLAY_DECIMAL_PRECISION)
    }

    /// Allocation percentage formatted with one decimal.
    pub fn display_allocated_percentage(&self) -> String {
        format_fixed(self.allocated_income_percentage, PERCENTAGE_DISPLAY_PRECISION)
    }
}

fn allocated_amount(monthly_income: Decimal, percentage: Decimal) -> Result<Decimal> {
    monthly_income
        .checked_mul(percentage)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            ValidationError::AmountOverflow("allocatedIncomeAmount".to_string()).into()
        })
}

fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, DISPLAY_ROUNDING);
    rounded.rescale(dp);
    rounded.to_string()
}
