use playwright_dashboard::results::flatten::{StatusKind, flatten_tests};
use playwright_dashboard::results::model::{
    AttemptResult, ResultsDocument, SpecNode, SuiteNode, TestNode,
};

// ============================================================================
// Helper builders
// ============================================================================

fn attempt(status: &str, duration: f64) -> AttemptResult {
    AttemptResult {
        status: Some(status.to_string()),
        duration,
    }
}

fn test_node(attempts: Vec<AttemptResult>) -> TestNode {
    TestNode { results: attempts }
}

fn spec_node(title: &str, file: Option<&str>, tests: Vec<TestNode>) -> SpecNode {
    SpecNode {
        title: title.to_string(),
        file: file.map(str::to_string),
        tests,
    }
}

fn suite_node(title: Option<&str>, suites: Vec<SuiteNode>, specs: Vec<SpecNode>) -> SuiteNode {
    SuiteNode {
        title: title.map(str::to_string),
        suites,
        specs,
    }
}

fn doc(suites: Vec<SuiteNode>) -> ResultsDocument {
    ResultsDocument {
        suites,
        stats: None,
    }
}

fn one_test_spec(title: &str, status: &str, duration: f64) -> SpecNode {
    spec_node(title, None, vec![test_node(vec![attempt(status, duration)])])
}

// ============================================================================
// 1. Status mapping
// ============================================================================

#[test]
fn status_mapping_wire_vocabulary() {
    assert_eq!(StatusKind::from_wire(Some("expected")), StatusKind::Passed);
    assert_eq!(StatusKind::from_wire(Some("unexpected")), StatusKind::Failed);
    assert_eq!(StatusKind::from_wire(Some("skipped")), StatusKind::Skipped);
    assert_eq!(StatusKind::from_wire(Some("flaky")), StatusKind::Flaky);
}

#[test]
fn status_mapping_unrecognized_is_unknown() {
    assert_eq!(StatusKind::from_wire(Some("timedOut")), StatusKind::Unknown);
    assert_eq!(StatusKind::from_wire(Some("passed")), StatusKind::Unknown);
    assert_eq!(StatusKind::from_wire(Some("")), StatusKind::Unknown);
    assert_eq!(StatusKind::from_wire(None), StatusKind::Unknown);
}

// ============================================================================
// 2. Single test
// ============================================================================

#[test]
fn flatten_single_test() {
    let d = doc(vec![suite_node(
        Some("Auth"),
        vec![],
        vec![one_test_spec("logs in", "expected", 300.0)],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].group, "Auth");
    assert_eq!(records[0].title, "logs in");
    assert_eq!(records[0].status, StatusKind::Passed);
    assert_eq!(records[0].duration_ms, 300.0);
}

// ============================================================================
// 3. Last attempt wins
// ============================================================================

#[test]
fn flatten_last_attempt_is_authoritative() {
    let d = doc(vec![suite_node(
        Some("Retry"),
        vec![],
        vec![spec_node(
            "eventually passes",
            None,
            vec![test_node(vec![
                attempt("unexpected", 500.0),
                attempt("expected", 200.0),
            ])],
        )],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].status, StatusKind::Passed);
    assert_eq!(records[0].duration_ms, 200.0);
}

#[test]
fn flatten_flaky_verdict_on_final_attempt() {
    // The runner records the retry verdict on the test's final result
    let d = doc(vec![suite_node(
        Some("Retry"),
        vec![],
        vec![spec_node(
            "flaky test",
            None,
            vec![test_node(vec![
                attempt("unexpected", 500.0),
                attempt("flaky", 200.0),
            ])],
        )],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].status, StatusKind::Flaky);
}

// ============================================================================
// 4. Empty attempt list
// ============================================================================

#[test]
fn flatten_no_attempts_is_unknown_with_zero_duration() {
    let d = doc(vec![suite_node(
        Some("Hollow"),
        vec![],
        vec![spec_node("never ran", None, vec![test_node(vec![])])],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, StatusKind::Unknown);
    assert_eq!(records[0].duration_ms, 0.0);
}

// ============================================================================
// 5. Group resolution — innermost suite wins
// ============================================================================

#[test]
fn flatten_innermost_named_suite_wins() {
    let d = doc(vec![suite_node(
        Some("A"),
        vec![suite_node(
            Some("B"),
            vec![],
            vec![one_test_spec("nested", "expected", 10.0)],
        )],
        vec![],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "B");
}

#[test]
fn flatten_untitled_inner_suite_inherits_outer_title() {
    let d = doc(vec![suite_node(
        Some("A"),
        vec![suite_node(
            None,
            vec![],
            vec![one_test_spec("nested", "expected", 10.0)],
        )],
        vec![],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "A");
}

#[test]
fn flatten_empty_title_counts_as_unnamed() {
    let d = doc(vec![suite_node(
        Some(""),
        vec![],
        vec![spec_node(
            "orphan",
            Some("tests/health.spec.ts"),
            vec![test_node(vec![attempt("expected", 10.0)])],
        )],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "health");
}

// ============================================================================
// 6. Group resolution — file fallback
// ============================================================================

#[test]
fn flatten_file_fallback_strips_spec_suffix() {
    let d = doc(vec![suite_node(
        None,
        vec![],
        vec![spec_node(
            "health check",
            Some("tests/health.spec.ts"),
            vec![test_node(vec![attempt("expected", 5.0)])],
        )],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "health");
}

#[test]
fn flatten_file_fallback_keeps_other_extensions() {
    let d = doc(vec![suite_node(
        None,
        vec![],
        vec![spec_node(
            "smoke",
            Some("tests/smoke.test.js"),
            vec![test_node(vec![attempt("expected", 5.0)])],
        )],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "smoke.test.js");
}

#[test]
fn flatten_no_suite_title_and_no_file_yields_empty_group() {
    let d = doc(vec![suite_node(
        None,
        vec![],
        vec![one_test_spec("floating", "expected", 5.0)],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "");
}

// ============================================================================
// 7. Ordering — depth-first pre-order, suites before specs
// ============================================================================

#[test]
fn flatten_child_suites_before_own_specs() {
    let d = doc(vec![suite_node(
        Some("Outer"),
        vec![suite_node(
            Some("Inner"),
            vec![],
            vec![one_test_spec("first", "expected", 1.0)],
        )],
        vec![one_test_spec("second", "expected", 1.0)],
    )]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].title, "first");
    assert_eq!(records[1].title, "second");
}

#[test]
fn flatten_preserves_document_order_across_roots() {
    let d = doc(vec![
        suite_node(Some("One"), vec![], vec![one_test_spec("a", "expected", 1.0)]),
        suite_node(Some("Two"), vec![], vec![one_test_spec("b", "expected", 1.0)]),
    ]);

    let records = flatten_tests(&d);
    assert_eq!(records[0].group, "One");
    assert_eq!(records[1].group, "Two");
}

// ============================================================================
// 8. Deep nesting
// ============================================================================

#[test]
fn flatten_handles_deep_nesting() {
    let mut suite = suite_node(
        Some("deepest"),
        vec![],
        vec![one_test_spec("buried", "expected", 1.0)],
    );
    for i in 0..50 {
        suite = suite_node(Some(&format!("level-{}", i)), vec![suite], vec![]);
    }

    let records = flatten_tests(&doc(vec![suite]));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].group, "deepest");
}

// ============================================================================
// 9. Empty tree
// ============================================================================

#[test]
fn flatten_empty_suites_yields_no_records() {
    let records = flatten_tests(&doc(vec![]));
    assert!(records.is_empty());
}
