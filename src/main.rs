//! podrescue CLI entry point

use clap::error::ErrorKind;
use clap::Parser;
use podrescue::config::{Cli, Settings};
use podrescue::pipeline;
use podrescue::tags::LoftyTagReader;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments; missing positionals exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    // Initialize logging
    init_logging(&cli);

    // Build settings from CLI
    let settings = Settings::from_cli(&cli);

    // Validate inputs
    if let Err(e) = validate_inputs(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    // Run the recovery
    match pipeline::run(&settings, &LoftyTagReader) {
        Ok(summary) => {
            println!();
            println!(
                "Summary: {} processed, {} skipped",
                summary.processed, summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn validate_inputs(cli: &Cli) -> Result<(), String> {
    if !cli.source.is_dir() {
        return Err(format!(
            "Source directory does not exist: {}\n\n  Tip: Check the path is correct and accessible.\n  Examples:\n    podrescue ~/ipod_dump ~/Music/recovered\n    podrescue -m -v ./dump ./sorted",
            cli.source.display()
        ));
    }

    // The destination itself is created on demand, but its parent must exist
    if let Some(parent) = cli.dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(format!(
                "Destination parent directory does not exist: {}\n\n  Tip: The destination directory will be created automatically,\n  but its parent directory must exist.\n  Example: mkdir -p {}",
                parent.display(),
                parent.display()
            ));
        }
    }

    Ok(())
}
