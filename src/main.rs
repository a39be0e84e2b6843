use std::path::Path;
use std::process;

use clap::Parser;
use playwright_dashboard::cli::commands::cmd_generate;
use playwright_dashboard::cli::config::{Cli, load_config, resolve_paths};

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve paths: CLI > config > defaults
    let (input, output_dir) = resolve_paths(&cli, &config);

    if let Err(e) = cmd_generate(Path::new(&input), Path::new(&output_dir), cli.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
