use async_trait::async_trait;
use congress_client::{Chamber, Committee, CongressClient, CongressError};

use super::BaseCommitteeService;

/// Committee service backed by the Congress REST API
#[derive(Clone)]
pub struct CongressCommitteeService {
    client: CongressClient,
}

impl CongressCommitteeService {
    pub fn new(client: CongressClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseCommitteeService for CongressCommitteeService {
    async fn for_chamber(&self, chamber: Chamber) -> Result<Vec<Committee>, CongressError> {
        self.client.committees_for_chamber(chamber).await
    }

    async fn for_legislator(&self, bioguide_id: &str) -> Result<Vec<Committee>, CongressError> {
        self.client.committees_for_legislator(bioguide_id).await
    }
}
