//! Debtboard Core - debt records, dashboard aggregation and the snapshot store.
//!
//! This crate holds the business logic of the debt dashboard. It owns no
//! persistence or presentation: collaborators hand it a snapshot, invoke
//! commands on the [`DashboardStore`], and read back replacement snapshots.

pub mod constants;
pub mod dashboard;
pub mod debts;
pub mod errors;
pub mod events;
pub mod history;
pub mod overview;
pub mod profile;
pub mod utils;

// Re-export the common domain surface
pub use dashboard::*;
pub use debts::*;
pub use history::*;
pub use overview::*;
pub use profile::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
