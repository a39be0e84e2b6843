use std::path::{Path, PathBuf};

use crate::error::DashboardError;

// ============================================================================
// Output writer — persists the rendered dashboard
// ============================================================================

/// Name of the generated document inside the output directory.
pub const DASHBOARD_FILENAME: &str = "index.html";

/// Write the rendered dashboard into `out_dir`, creating the directory and
/// any missing parents first. Returns the path of the written file.
///
/// No partial-file cleanup on failure: the next run overwrites.
pub fn write_dashboard(out_dir: &Path, html: &str) -> Result<PathBuf, DashboardError> {
    std::fs::create_dir_all(out_dir).map_err(|e| DashboardError::WriteError {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let out_path = out_dir.join(DASHBOARD_FILENAME);
    std::fs::write(&out_path, html).map_err(|e| DashboardError::WriteError {
        path: out_path.clone(),
        source: e,
    })?;

    Ok(out_path)
}
