//! Dashboard module - the snapshot aggregate, its store and loader.

mod dashboard_loader;
mod dashboard_model;
mod dashboard_store;
mod dashboard_traits;
mod id_generator;


pub use dashboard_loader::{load_snapshot_from_path, load_snapshot_from_str, save_snapshot_to_path};
pub use dashboard_model::{AdvisorContext, DashboardSnapshot};
pub use dashboard_store::DashboardStore;
pub use dashboard_traits::{DashboardServiceTrait, IdGenerator};
pub use id_generator::UuidIdGenerator;
