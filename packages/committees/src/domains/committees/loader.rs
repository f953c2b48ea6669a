//! Background committee loading.
//!
//! A load fetches from the committee service, orders the result, and hands it
//! back through a one-shot channel. Chamber loads never fail: a service error
//! is logged and becomes an empty list. Legislator loads report the failure.

use congress_client::{Committee, CongressError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use super::models::CommitteeSource;
use super::ordering::order_committees;
use crate::kernel::BaseCommitteeService;

/// User-facing message for a failed legislator load.
pub const FETCH_ERROR_MESSAGE: &str = "Error loading committees.";

#[derive(Debug, Error)]
pub enum LoadError {
    /// The committee service failed; `message` is fit for display
    #[error("{message}")]
    Fetch {
        message: String,
        #[source]
        source: CongressError,
    },

    /// The load task went away without delivering a result
    #[error("committee load ended without a result")]
    Aborted,
}

impl LoadError {
    /// True when the service had nothing for the key rather than failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Fetch { source, .. } if source.is_not_found())
    }
}

pub type LoadOutcome = Result<Vec<Committee>, LoadError>;

/// Fetch and order the committees for `source`.
pub async fn load_committees(
    service: &dyn BaseCommitteeService,
    source: &CommitteeSource,
) -> LoadOutcome {
    let committees = match source {
        CommitteeSource::Chamber(chamber) => match service.for_chamber(*chamber).await {
            Ok(committees) => committees,
            Err(e) => {
                error!(
                    chamber = %chamber,
                    error = %e,
                    "Failed to get committees for chamber"
                );
                Vec::new()
            }
        },
        CommitteeSource::Legislator(legislator) => service
            .for_legislator(&legislator.bioguide_id)
            .await
            .map_err(|source| LoadError::Fetch {
                message: FETCH_ERROR_MESSAGE.to_string(),
                source,
            })?,
    };

    let ordered = order_committees(committees, source.ordering_mode());
    info!(%source, count = ordered.len(), "Committees loaded");
    Ok(ordered)
}

/// Spawns committee loads onto the tokio runtime.
pub struct LoadCommitteesTask;

impl LoadCommitteesTask {
    /// Start loading in the background. Must be called from within a tokio runtime.
    pub fn spawn(service: Arc<dyn BaseCommitteeService>, source: CommitteeSource) -> PendingLoad {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = load_committees(service.as_ref(), &source).await;
            if tx.send(outcome).is_err() {
                debug!(%source, "Committee load finished after its receiver was dropped");
            }
        });

        PendingLoad { rx }
    }
}

/// Handle to an in-flight load. Resolves exactly once.
#[must_use = "a pending load does nothing unless awaited"]
pub struct PendingLoad {
    rx: oneshot::Receiver<LoadOutcome>,
}

impl PendingLoad {
    pub async fn wait(self) -> LoadOutcome {
        self.rx.await.unwrap_or(Err(LoadError::Aborted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{committee, ids, subcommittee};
    use crate::kernel::{MockCommitteeService, ServiceCall};
    use congress_client::Chamber::{House, Joint, Senate};
    use congress_client::Legislator;

    #[tokio::test]
    async fn chamber_load_sorts_by_id() {
        let service = MockCommitteeService::new().with_chamber(
            House,
            vec![committee("HSWM", House), committee("HSAG", House)],
        );

        let committees = load_committees(&service, &CommitteeSource::Chamber(House))
            .await
            .unwrap();

        assert_eq!(ids(&committees), vec!["HSAG", "HSWM"]);
        assert_eq!(service.calls(), vec![ServiceCall::Chamber(House)]);
    }

    #[tokio::test]
    async fn chamber_failure_degrades_to_empty_list() {
        let service = MockCommitteeService::new().failing_chamber(Senate, "boom");

        let committees = load_committees(&service, &CommitteeSource::Chamber(Senate))
            .await
            .unwrap();

        assert!(committees.is_empty());
    }

    #[tokio::test]
    async fn legislator_load_uses_legislator_ordering() {
        let service = MockCommitteeService::new().with_legislator(
            "B000944",
            vec![
                committee("JSEC", Joint),
                subcommittee("SSFI02", Senate, "SSFI"),
                committee("SSFI", Senate),
            ],
        );
        let source = CommitteeSource::Legislator(Legislator::new("B000944"));

        let committees = load_committees(&service, &source).await.unwrap();

        assert_eq!(ids(&committees), vec!["SSFI", "SSFI02", "JSEC"]);
        assert_eq!(
            service.calls(),
            vec![ServiceCall::Legislator("B000944".into())]
        );
    }

    #[tokio::test]
    async fn legislator_failure_is_reported() {
        let service = MockCommitteeService::new().failing_legislator("B000944", "boom");
        let source = CommitteeSource::Legislator(Legislator::new("B000944"));

        let err = load_committees(&service, &source).await.unwrap_err();

        assert_eq!(err.to_string(), FETCH_ERROR_MESSAGE);
        assert!(!err.is_not_found());
        match err {
            LoadError::Fetch { source, .. } => {
                assert!(matches!(source, CongressError::Api { status: 500, .. }))
            }
            LoadError::Aborted => panic!("expected fetch error"),
        }
    }

    #[tokio::test]
    async fn legislator_not_found_is_distinguishable() {
        let service = MockCommitteeService::new().missing_legislator("X000000");
        let source = CommitteeSource::Legislator(Legislator::new("X000000"));

        let err = load_committees(&service, &source).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), FETCH_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn spawned_load_delivers_once() {
        let service = Arc::new(
            MockCommitteeService::new()
                .with_chamber(Joint, vec![committee("JSPR", Joint), committee("JSEC", Joint)]),
        );

        let pending = LoadCommitteesTask::spawn(service.clone(), CommitteeSource::Chamber(Joint));
        let committees = pending.wait().await.unwrap();

        assert_eq!(ids(&committees), vec!["JSEC", "JSPR"]);
        assert_eq!(service.calls().len(), 1);
    }
}
