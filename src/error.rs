use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DashboardError {
    /// Results file does not exist or could not be read
    NotFound { path: PathBuf, source: std::io::Error },

    /// Results file content is not parseable as a results document
    MalformedDocument { path: PathBuf, source: serde_json::Error },

    /// Output directory or dashboard file could not be written
    WriteError { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::NotFound { path, source } => {
                write!(
                    f,
                    "{} not found ({}). Run tests first: npx playwright test",
                    path.display(),
                    source
                )
            }
            DashboardError::MalformedDocument { path, source } => {
                write!(
                    f,
                    "failed to parse {}: {}. The results file may be incomplete or corrupted; re-run your tests: npx playwright test",
                    path.display(),
                    source
                )
            }
            DashboardError::WriteError { path, source } => {
                write!(
                    f,
                    "failed to write dashboard to {}: {}. Check that the location is writable",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::NotFound { source, .. } => Some(source),
            DashboardError::MalformedDocument { source, .. } => Some(source),
            DashboardError::WriteError { source, .. } => Some(source),
        }
    }
}
