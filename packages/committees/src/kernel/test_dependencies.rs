// Test dependencies - mock implementations for testing
//
// Provides a scripted committee service plus fixture builders so tests never
// touch the network.

use async_trait::async_trait;
use congress_client::{Chamber, Committee, CongressError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::BaseCommitteeService;

// =============================================================================
// Mock Committee Service
// =============================================================================

/// A lookup the service was asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Chamber(Chamber),
    Legislator(String),
}

#[derive(Debug, Clone)]
enum MockResponse {
    Committees(Vec<Committee>),
    NotFound,
    Failure(String),
}

impl MockResponse {
    fn into_result(self, key: &str) -> Result<Vec<Committee>, CongressError> {
        match self {
            MockResponse::Committees(committees) => Ok(committees),
            MockResponse::NotFound => Err(CongressError::NotFound(key.to_string())),
            MockResponse::Failure(message) => Err(CongressError::Api {
                status: 500,
                message,
            }),
        }
    }
}

/// Scripted committee service. Unscripted lookups return no committees.
#[derive(Clone, Default)]
pub struct MockCommitteeService {
    responses: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    calls: Arc<Mutex<Vec<ServiceCall>>>,
}

impl MockCommitteeService {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, key: String, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back(response);
        self
    }

    /// Queue committees for a chamber lookup
    pub fn with_chamber(self, chamber: Chamber, committees: Vec<Committee>) -> Self {
        self.push(chamber_key(chamber), MockResponse::Committees(committees))
    }

    /// Queue committees for a legislator lookup
    pub fn with_legislator(self, bioguide_id: &str, committees: Vec<Committee>) -> Self {
        self.push(
            legislator_key(bioguide_id),
            MockResponse::Committees(committees),
        )
    }

    /// Make the next chamber lookup fail with a server error
    pub fn failing_chamber(self, chamber: Chamber, message: &str) -> Self {
        self.push(chamber_key(chamber), MockResponse::Failure(message.into()))
    }

    /// Make the next legislator lookup fail with a server error
    pub fn failing_legislator(self, bioguide_id: &str, message: &str) -> Self {
        self.push(
            legislator_key(bioguide_id),
            MockResponse::Failure(message.into()),
        )
    }

    /// Make the next legislator lookup report "not found"
    pub fn missing_legislator(self, bioguide_id: &str) -> Self {
        self.push(legislator_key(bioguide_id), MockResponse::NotFound)
    }

    /// Get all lookups performed so far
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, key: &str) -> Result<Vec<Committee>, CongressError> {
        let queued = self
            .responses
            .lock()
            .unwrap()
            .get_mut(key)
            .and_then(|queue| queue.pop_front());

        match queued {
            Some(response) => response.into_result(key),
            None => Ok(vec![]),
        }
    }
}

fn chamber_key(chamber: Chamber) -> String {
    format!("chamber:{}", chamber)
}

fn legislator_key(bioguide_id: &str) -> String {
    format!("legislator:{}", bioguide_id)
}

#[async_trait]
impl BaseCommitteeService for MockCommitteeService {
    async fn for_chamber(&self, chamber: Chamber) -> Result<Vec<Committee>, CongressError> {
        self.calls.lock().unwrap().push(ServiceCall::Chamber(chamber));
        self.next(&chamber_key(chamber))
    }

    async fn for_legislator(&self, bioguide_id: &str) -> Result<Vec<Committee>, CongressError> {
        self.calls
            .lock()
            .unwrap()
            .push(ServiceCall::Legislator(bioguide_id.to_string()));
        self.next(&legislator_key(bioguide_id))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Top-level committee with a name derived from its id
pub fn committee(id: &str, chamber: Chamber) -> Committee {
    Committee {
        id: id.to_string(),
        name: format!("Committee {}", id),
        chamber,
        subcommittee: false,
        parent_committee_id: None,
        url: None,
        office: None,
        phone: None,
    }
}

/// Subcommittee of `parent_id`
pub fn subcommittee(id: &str, chamber: Chamber, parent_id: &str) -> Committee {
    Committee {
        name: format!("Subcommittee {}", id),
        subcommittee: true,
        parent_committee_id: Some(parent_id.to_string()),
        ..committee(id, chamber)
    }
}

/// Ids of a committee sequence, for compact assertions
pub fn ids(committees: &[Committee]) -> Vec<&str> {
    committees.iter().map(|c| c.id.as_str()).collect()
}
