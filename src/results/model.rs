use serde::{Deserialize, Serialize};

// ============================================================================
// Results document model — the shape produced by the upstream test runner
// ============================================================================

/// Top-level results document (`test-results.json`).
///
/// Only the fields this tool consumes are modeled; the runner emits many
/// more, and serde ignores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    /// Root suites, one per test file (possibly nested further)
    #[serde(default)]
    pub suites: Vec<SuiteNode>,

    /// Run-level statistics reported by the runner
    pub stats: Option<RunStats>,
}

/// Run-level statistics block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Wall-clock duration of the whole run, in milliseconds. Includes
    /// runner overhead not attributable to any single test.
    #[serde(default)]
    pub duration: f64,
}

/// One suite node. Suites nest to arbitrary depth; leaves are specs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteNode {
    /// Suite title; file-level suites may have none
    pub title: Option<String>,

    /// Nested child suites
    #[serde(default)]
    pub suites: Vec<SuiteNode>,

    /// Specs declared directly in this suite
    #[serde(default)]
    pub specs: Vec<SpecNode>,
}

/// One spec: a named test declaration within a source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecNode {
    /// Spec title
    #[serde(default)]
    pub title: String,

    /// Source file the spec was declared in
    pub file: Option<String>,

    /// Tests generated from this spec (one per project/configuration)
    #[serde(default)]
    pub tests: Vec<TestNode>,
}

/// One test: a list of attempt results in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestNode {
    /// Attempt results; later entries are retries of earlier ones
    #[serde(default)]
    pub results: Vec<AttemptResult>,
}

/// One recorded execution attempt of a test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptResult {
    /// Raw status string from the runner
    pub status: Option<String>,

    /// Attempt duration in milliseconds
    #[serde(default)]
    pub duration: f64,
}
