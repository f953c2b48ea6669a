pub mod list;
pub mod loader;
pub mod models;
pub mod ordering;

// Re-export commonly used types
pub use list::{CommitteeList, CommitteeRow, ListState, Navigator, RowLayout};
pub use loader::{load_committees, LoadCommitteesTask, LoadError, LoadOutcome, PendingLoad};
pub use models::{CommitteeSource, OrderingMode};
pub use ordering::order_committees;
