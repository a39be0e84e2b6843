use serde::{Deserialize, Serialize};

use crate::results::model::{ResultsDocument, SpecNode, SuiteNode};

// ============================================================================
// Test flattener — walks the nested suite tree into flat per-test records
// ============================================================================

/// Final classification of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Passed,
    Failed,
    Skipped,
    Flaky,
    Unknown,
}

impl StatusKind {
    /// Map a raw status string from the results document.
    ///
    /// The vocabulary is the runner's: "expected" means passed and
    /// "unexpected" means failed. Anything else (including an absent
    /// status) is Unknown; Unknown counts as skipped during aggregation so
    /// an unrecognized status never drops out of the totals.
    pub fn from_wire(status: Option<&str>) -> Self {
        match status {
            Some("expected") => StatusKind::Passed,
            Some("unexpected") => StatusKind::Failed,
            Some("skipped") => StatusKind::Skipped,
            Some("flaky") => StatusKind::Flaky,
            _ => StatusKind::Unknown,
        }
    }
}

/// One flattened test: the unit consumed by aggregation and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Reporting group: innermost enclosing suite title, or the spec's
    /// file-derived fallback
    pub group: String,

    /// Test title from the spec
    pub title: String,

    /// Status of the last recorded attempt
    pub status: StatusKind,

    /// Duration of the last recorded attempt, in milliseconds
    pub duration_ms: f64,
}

/// Flatten the suite tree into an ordered list of per-test records.
///
/// Depth-first pre-order: child suites before specs, document order
/// throughout. The innermost named suite supplies the group; a spec with
/// no enclosing suite title falls back to its file name. The last attempt
/// in each test's result list is authoritative; a test with no attempts
/// gets status Unknown and duration 0.
pub fn flatten_tests(doc: &ResultsDocument) -> Vec<TestRecord> {
    let mut records = Vec::new();
    for suite in &doc.suites {
        walk_suite(suite, None, &mut records);
    }
    records
}

fn walk_suite(suite: &SuiteNode, group: Option<&str>, out: &mut Vec<TestRecord>) {
    // Innermost named suite wins as the group context; an empty title
    // counts as unnamed
    let group = suite.title.as_deref().filter(|t| !t.is_empty()).or(group);

    for child in &suite.suites {
        walk_suite(child, group, out);
    }
    for spec in &suite.specs {
        collect_spec(spec, group, out);
    }
}

fn collect_spec(spec: &SpecNode, group: Option<&str>, out: &mut Vec<TestRecord>) {
    let group_name = match group {
        Some(name) => name.to_string(),
        None => file_fallback(spec.file.as_deref()),
    };

    for test in &spec.tests {
        let last = test.results.last();
        out.push(TestRecord {
            group: group_name.clone(),
            title: spec.title.clone(),
            status: StatusKind::from_wire(last.and_then(|r| r.status.as_deref())),
            duration_ms: last.map_or(0.0, |r| r.duration),
        });
    }
}

/// Derive a group name from a spec's source file: the basename with a
/// trailing ".spec.ts" test suffix stripped.
fn file_fallback(file: Option<&str>) -> String {
    let file = file.unwrap_or("");
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    base.strip_suffix(".spec.ts").unwrap_or(base).to_string()
}
