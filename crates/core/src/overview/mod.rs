//! Dashboard overview - aggregate totals and balance history over all debts.

mod overview_calculator;
mod overview_model;


pub use overview_calculator::compute_overview;
pub use overview_model::DashboardOverview;
