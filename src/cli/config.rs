use clap::Parser;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

/// Built-in default for the results file, relative to the working
/// directory.
pub const DEFAULT_INPUT: &str = "test-results.json";

/// Built-in default for the output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard";

#[derive(Parser, Debug)]
#[command(
    name = "playwright-dashboard",
    version,
    about = "Generate a static HTML dashboard from Playwright JSON test results"
)]
pub struct Cli {
    /// Path to the JSON results file (default: test-results.json)
    pub input: Option<String>,

    /// Directory for the generated dashboard (default: dashboard)
    pub output_dir: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file (default: dashboard.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `dashboard.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Results file to read when not given on the command line
    pub input: Option<String>,

    /// Output directory to use when not given on the command line
    pub output_dir: Option<String>,
}

/// Load config from a YAML file. Returns defaults if the file is missing
/// or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("dashboard.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the input and output paths: CLI > config > built-in defaults.
pub fn resolve_paths(cli: &Cli, config: &AppConfig) -> (String, String) {
    let input = cli
        .input
        .clone()
        .or_else(|| config.input.clone())
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    (input, output_dir)
}
