//! Committee list screen model.
//!
//! Holds the loaded committees and what the screen should currently show. A
//! result may arrive while no view is attached; it is kept and shown on the
//! next [`CommitteeList::attach`].

use congress_client::{Chamber, Committee, Legislator};
use std::sync::Arc;
use tracing::debug;

use super::loader::{LoadCommitteesTask, LoadError, LoadOutcome, PendingLoad};
use super::models::CommitteeSource;
use crate::kernel::BaseCommitteeService;

pub const LOADING_MESSAGE: &str = "Loading committees...";
pub const CHAMBER_EMPTY_MESSAGE: &str = "No committees found.";
pub const LEGISLATOR_EMPTY_MESSAGE: &str = "This legislator does not serve on any committees.";

/// Row template for a committee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    Committee,
    Subcommittee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeRow {
    pub name: String,
    pub layout: RowLayout,
}

impl From<&Committee> for CommitteeRow {
    fn from(committee: &Committee) -> Self {
        Self {
            name: committee.name.clone(),
            layout: if committee.subcommittee {
                RowLayout::Subcommittee
            } else {
                RowLayout::Committee
            },
        }
    }
}

/// What the screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading { message: String },
    Loaded(Vec<CommitteeRow>),
    Empty { message: String },
}

/// Receives row selections
pub trait Navigator {
    fn open_committee(&mut self, committee: &Committee);
}

pub struct CommitteeList {
    source: CommitteeSource,
    committees: Option<Vec<Committee>>,
    attached: bool,
    state: ListState,
}

impl CommitteeList {
    pub fn new(source: CommitteeSource) -> Self {
        Self {
            source,
            committees: None,
            attached: false,
            state: ListState::Loading {
                message: LOADING_MESSAGE.to_string(),
            },
        }
    }

    pub fn for_chamber(chamber: Chamber) -> Self {
        Self::new(CommitteeSource::Chamber(chamber))
    }

    pub fn for_legislator(legislator: Legislator) -> Self {
        Self::new(CommitteeSource::Legislator(legislator))
    }

    pub fn source(&self) -> &CommitteeSource {
        &self.source
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Loaded committees in display order, if a load has completed
    pub fn committees(&self) -> Option<&[Committee]> {
        self.committees.as_deref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Kick off the background load for this list's source.
    pub fn start(&self, service: Arc<dyn BaseCommitteeService>) -> PendingLoad {
        LoadCommitteesTask::spawn(service, self.source.clone())
    }

    /// A view is now showing this list.
    pub fn attach(&mut self) {
        self.attached = true;
        self.state = ListState::Loading {
            message: LOADING_MESSAGE.to_string(),
        };

        if self.committees.is_some() {
            self.display();
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn on_loaded(&mut self, committees: Vec<Committee>) {
        self.committees = Some(committees);

        if self.attached {
            self.display();
        }
    }

    /// Failures are only surfaced to an attached view.
    pub fn on_failed(&mut self, error: &LoadError) {
        if self.attached {
            self.state = ListState::Empty {
                message: error.to_string(),
            };
        } else {
            debug!(source = %self.source, error = %error, "Dropping load failure, no view attached");
        }
    }

    pub fn apply(&mut self, outcome: LoadOutcome) {
        match outcome {
            Ok(committees) => self.on_loaded(committees),
            Err(e) => self.on_failed(&e),
        }
    }

    /// Forward the committee at `position` to the navigator.
    pub fn select<N: Navigator + ?Sized>(
        &self,
        position: usize,
        navigator: &mut N,
    ) -> Option<&Committee> {
        if !matches!(self.state, ListState::Loaded(_)) {
            return None;
        }

        let committee = self.committees.as_ref()?.get(position)?;
        navigator.open_committee(committee);
        Some(committee)
    }

    fn display(&mut self) {
        let committees = self.committees.as_deref().unwrap_or_default();

        self.state = if committees.is_empty() {
            ListState::Empty {
                message: self.empty_message().to_string(),
            }
        } else {
            ListState::Loaded(committees.iter().map(CommitteeRow::from).collect())
        };
    }

    fn empty_message(&self) -> &'static str {
        match self.source {
            CommitteeSource::Chamber(_) => CHAMBER_EMPTY_MESSAGE,
            CommitteeSource::Legislator(_) => LEGISLATOR_EMPTY_MESSAGE,
        }
    }
}
