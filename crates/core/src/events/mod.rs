//! Dashboard events module.
//!
//! Provides the event types and the sink trait used to announce a new
//! snapshot after each successful command. Collaborators (renderers,
//! persistence adapters) implement the sink to react to changes.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
