//! Kernel module - service infrastructure and dependencies.

pub mod congress_service;
pub mod test_dependencies;
pub mod traits;

pub use congress_service::CongressCommitteeService;
pub use test_dependencies::{MockCommitteeService, ServiceCall};
pub use traits::*;
