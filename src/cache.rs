use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

use crate::aggregate::{aggregate, rank_pages};
use crate::models::StatusResponse;
use crate::stats::{PageRanking, StatisticsSummary, TrendSummary};
use crate::trends::analyze_trends;

/// Everything the status page derives from one status response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedStatistics {
    pub total: u64,
    pub today: u64,
    pub days: u32,
    pub statistics: StatisticsSummary,
    pub trends: TrendSummary,
    pub pages: PageRanking,
}

impl DerivedStatistics {
    pub fn compute(status: &StatusResponse) -> Self {
        Self {
            total: status.total,
            today: status.today,
            days: status.days,
            statistics: aggregate(&status.daily_results),
            trends: analyze_trends(&status.daily_results),
            pages: rank_pages(&status.page_results),
        }
    }
}

fn fingerprint(status: &StatusResponse) -> u64 {
    let mut hasher = DefaultHasher::new();
    status.total.hash(&mut hasher);
    status.today.hash(&mut hasher);
    status.days.hash(&mut hasher);
    status.daily_results.hash(&mut hasher);
    status.page_results.hash(&mut hasher);
    hasher.finish()
}

/// Keeps the derived statistics for the last status seen and recomputes them
/// only when the input changes.
#[derive(Debug, Default)]
pub struct StatusView {
    fingerprint: Option<u64>,
    derived: DerivedStatistics,
    recomputations: usize,
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the statistics were recomputed.
    pub fn refresh(&mut self, status: &StatusResponse) -> bool {
        let fingerprint = fingerprint(status);
        if self.fingerprint == Some(fingerprint) {
            debug!(
                action = "skip",
                component = "status_view",
                "Status unchanged, reusing statistics"
            );
            return false;
        }

        self.derived = DerivedStatistics::compute(status);
        self.fingerprint = Some(fingerprint);
        self.recomputations += 1;
        true
    }

    pub fn derived(&self) -> &DerivedStatistics {
        &self.derived
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
