//! Debts module - debt records, payments and new-debt input.

mod debts_model;


pub use debts_model::{Debt, NewDebtInput, PaymentInput, PaymentRecord};
