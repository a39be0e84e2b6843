use crate::report::aggregate::{GroupStat, Totals};

// ============================================================================
// Console summary — formatted terminal recap of the run totals
// ============================================================================

/// Format a short terminal summary of an aggregated run.
///
/// Produces output like:
/// ```text
/// === Results: 12 passed, 2 failed, 1 skipped, 1 flaky (16 total) in 42.3s ===
///   Auth: 4/5
///   Booking CRUD: 8/11
/// ```
pub fn format_console_summary(totals: &Totals, groups: &[GroupStat]) -> String {
    let mut out = String::new();
    let c = &totals.counts;

    out.push_str(&format!(
        "=== Results: {} passed, {} failed, {} skipped, {} flaky ({} total) in {:.1}s ===\n",
        c.passed, c.failed, c.skipped, c.flaky, c.total, totals.duration_seconds
    ));

    for group in groups {
        out.push_str(&format!(
            "  {}: {}/{}\n",
            group.name, group.counts.passed, group.counts.total
        ));
    }

    out
}
