use std::path::Path;

use crate::error::DashboardError;
use crate::results::model::ResultsDocument;

// ============================================================================
// Result tree loader — reads and parses the results document
// ============================================================================

/// Load and parse a results document from `path`.
///
/// Fails fast: an unreadable location is `NotFound`, unparseable content
/// is `MalformedDocument` carrying the underlying serde diagnostic. There
/// is no partial or best-effort parsing.
pub fn load_results(path: &Path) -> Result<ResultsDocument, DashboardError> {
    let content = std::fs::read_to_string(path).map_err(|e| DashboardError::NotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| DashboardError::MalformedDocument {
        path: path.to_path_buf(),
        source: e,
    })
}
