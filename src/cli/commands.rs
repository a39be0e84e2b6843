use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::DashboardError;
use crate::report::aggregate::aggregate;
use crate::report::console::format_console_summary;
use crate::report::html::render_dashboard;
use crate::report::writer::write_dashboard;
use crate::results::flatten::flatten_tests;
use crate::results::loader::load_results;

// ============================================================================
// generate command — load → flatten → aggregate → render → write
// ============================================================================

/// Generate the dashboard: one linear pass from the results file to
/// `index.html`. Returns the path of the written document.
///
/// The input is read before the output directory is touched, so a failed
/// load leaves the filesystem unchanged.
pub fn cmd_generate(
    input: &Path,
    output_dir: &Path,
    verbose: u8,
) -> Result<PathBuf, DashboardError> {
    if verbose > 0 {
        eprintln!("Reading results from {}...", input.display());
    }
    let doc = load_results(input)?;

    let records = flatten_tests(&doc);
    let run_duration_ms = doc.stats.as_ref().map(|s| s.duration);
    let (totals, groups) = aggregate(&records, run_duration_ms);

    if verbose > 0 {
        eprintln!(
            "Flattened {} tests across {} groups",
            records.len(),
            groups.len()
        );
    }

    let timestamp = Utc::now().format("%B %-d, %Y %H:%M UTC").to_string();
    let html = render_dashboard(&totals, &groups, &records, &timestamp);

    let out_path = write_dashboard(output_dir, &html)?;

    print!("{}", format_console_summary(&totals, &groups));
    println!("Dashboard generated \u{2192} {}", out_path.display());

    Ok(out_path)
}
