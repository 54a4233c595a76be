//! readme-lint CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use readme_lint::cli::Cli;
use readme_lint::lint::{HumanFormatter, JsonFormatter, LintFormatter, Linter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("readme_lint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readme_lint=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("readme-lint starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let linter = Linter::new();
    let findings = match linter.run(&cli.file) {
        Ok(findings) => findings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if findings.is_empty() && cli.format != "json" {
        println!("✓ All checks passed!");
        return ExitCode::SUCCESS;
    }

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    let result = match cli.format.as_str() {
        "json" => JsonFormatter::new(&cli.file).format(&findings, &mut writer),
        _ => HumanFormatter::new(&cli.file, !cli.no_color).format(&findings, &mut writer),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    if findings.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
