pub mod source;

pub use source::{CommitteeSource, OrderingMode};
