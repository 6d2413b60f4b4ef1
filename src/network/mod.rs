//! Network layer - runs inventory command workflows
//!
//! The Network actor receives commands and sends back their outcomes.

pub mod actor;
pub mod workflow;

pub use actor::NetworkActor;
pub use workflow::WorkflowSettings;
