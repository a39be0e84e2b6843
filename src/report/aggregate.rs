use serde::{Deserialize, Serialize};

use crate::results::flatten::{StatusKind, TestRecord};

// ============================================================================
// Aggregator — global and per-group status totals in a single pass
// ============================================================================

/// Per-status counters, shared by the global totals and each group.
///
/// Invariant: `passed + failed + skipped + flaky == total`; Unknown
/// records count under `skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub flaky: usize,
}

impl StatusCounts {
    fn record(&mut self, status: StatusKind) {
        self.total += 1;
        match status {
            StatusKind::Passed => self.passed += 1,
            StatusKind::Failed => self.failed += 1,
            StatusKind::Skipped | StatusKind::Unknown => self.skipped += 1,
            StatusKind::Flaky => self.flaky += 1,
        }
    }
}

/// Run-level totals for the summary cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub counts: StatusCounts,

    /// Run duration in seconds. The document's own `stats.duration` when
    /// present (it includes runner overhead no single test accounts for),
    /// else the sum of per-test durations.
    pub duration_seconds: f64,
}

impl Totals {
    /// Pass rate as a whole percentage. An empty run reports 0, not an
    /// error.
    pub fn pass_rate_pct(&self) -> u32 {
        if self.counts.total == 0 {
            0
        } else {
            (100.0 * self.counts.passed as f64 / self.counts.total as f64).round() as u32
        }
    }
}

/// One reporting group with its counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStat {
    pub name: String,
    pub counts: StatusCounts,
}

/// Aggregate the flat record sequence into global totals and per-group
/// totals, in one pass.
///
/// Group entries are created on first sight and keep first-seen order.
/// `run_duration_ms` is the document's own run duration, if it reported
/// one.
pub fn aggregate(records: &[TestRecord], run_duration_ms: Option<f64>) -> (Totals, Vec<GroupStat>) {
    let mut counts = StatusCounts::default();
    let mut groups: Vec<GroupStat> = Vec::new();

    for record in records {
        counts.record(record.status);

        match groups.iter_mut().find(|g| g.name == record.group) {
            Some(group) => group.counts.record(record.status),
            None => {
                let mut group = GroupStat {
                    name: record.group.clone(),
                    counts: StatusCounts::default(),
                };
                group.counts.record(record.status);
                groups.push(group);
            }
        }
    }

    let duration_ms =
        run_duration_ms.unwrap_or_else(|| records.iter().map(|r| r.duration_ms).sum());

    let totals = Totals {
        counts,
        duration_seconds: duration_ms / 1000.0,
    };

    (totals, groups)
}
