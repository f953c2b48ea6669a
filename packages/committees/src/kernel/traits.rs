// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no ordering or display logic.
// Committee ordering lives in domains::committees and works on what these return.
//
// Naming convention: Base* for trait names (e.g., BaseCommitteeService)

use async_trait::async_trait;
use congress_client::{Chamber, Committee, CongressError};

// =============================================================================
// Committee Service Trait (Infrastructure - remote committee lookups)
// =============================================================================

#[async_trait]
pub trait BaseCommitteeService: Send + Sync {
    /// All committees of a chamber, unordered
    async fn for_chamber(&self, chamber: Chamber) -> Result<Vec<Committee>, CongressError>;

    /// Committees a legislator sits on, keyed by bioguide id, unordered
    async fn for_legislator(&self, bioguide_id: &str) -> Result<Vec<Committee>, CongressError>;
}
