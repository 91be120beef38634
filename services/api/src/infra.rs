use metrics_exporter_prometheus::PrometheusHandle;
use patent_rubric::rubric::RubricScorer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) scorer: RubricScorer,
    pub(crate) scored: Arc<AtomicU64>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            scorer: RubricScorer::new(),
            scored: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn mark_ready(&self) {
        self.readiness.store(true, Ordering::Release);
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.readiness.load(Ordering::Acquire)
    }

    /// Records one scored document and returns the running total.
    pub(crate) fn record_scored(&self) -> u64 {
        self.scored.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    AppState::new(handle)
}
