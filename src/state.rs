use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::DriveCatalog;
use crate::config::AppConfig;
use crate::events::EventHub;

/// Shared application state passed to all API handlers via axum's State extractor.
///
/// Planning is pure and synchronous, so nothing here needs a lock.
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
    pub(crate) catalog: DriveCatalog,
    pub(crate) event_hub: EventHub,
    pub(crate) counters: RequestCounters,
}

impl AppState {
    pub(crate) fn new(config: AppConfig, catalog: DriveCatalog, event_hub: EventHub) -> Self {
        Self { config, catalog, event_hub, counters: RequestCounters::default() }
    }
}

/// Running totals reported by the status endpoint.
#[derive(Debug, Default)]
pub(crate) struct RequestCounters {
    plans: AtomicU64,
    pools_rejected: AtomicU64,
    sweeps: AtomicU64,
}

impl RequestCounters {
    pub(crate) fn record_plan(&self, rejected: u64) {
        self.plans.fetch_add(1, Ordering::Relaxed);
        self.pools_rejected.fetch_add(rejected, Ordering::Relaxed);
    }

    pub(crate) fn record_sweep(&self) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            plans: self.plans.load(Ordering::Relaxed),
            pools_rejected: self.pools_rejected.load(Ordering::Relaxed),
            sweeps: self.sweeps.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct CounterSnapshot {
    pub(crate) plans: u64,
    pub(crate) pools_rejected: u64,
    pub(crate) sweeps: u64,
}
