use congress_client::{Chamber, Legislator};
use std::fmt;

/// Where a committee list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitteeSource {
    Chamber(Chamber),
    Legislator(Legislator),
}

/// How a fetched committee list is put in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingMode {
    /// Plain id order
    ByChamber,
    /// Chamber committees first with subcommittees under their parents, then joint committees
    ByLegislator,
}

impl CommitteeSource {
    pub fn ordering_mode(&self) -> OrderingMode {
        match self {
            CommitteeSource::Chamber(_) => OrderingMode::ByChamber,
            CommitteeSource::Legislator(_) => OrderingMode::ByLegislator,
        }
    }
}

impl fmt::Display for CommitteeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitteeSource::Chamber(chamber) => write!(f, "chamber {}", chamber),
            CommitteeSource::Legislator(legislator) => {
                write!(f, "legislator {}", legislator.bioguide_id)
            }
        }
    }
}
