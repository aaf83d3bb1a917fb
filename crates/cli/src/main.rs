use std::process::ExitCode;

use gapscan_cli::config::{CliConfig, OutputFormat};
use gapscan_cli::load;
use gapscan_cli::report::Report;
use gapscan_engine::Analysis;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = CliConfig::from_env()?;
    tracing::debug!("Configuration: {:?}", config);

    let grid = load::load_map(&config.source)?;
    let analysis = Analysis::run(&grid, config.width)?;

    let stats = analysis.stats();
    tracing::info!(
        "{} atomic blocks, {} active ranges, {} fixed-width blocks",
        stats.atomic_blocks,
        stats.active_ranges,
        stats.fixed_blocks
    );
    if stats.atomic_blocks == 0 {
        tracing::warn!("No grounded gaps found -- is the map upside down?");
    }

    let report = Report::new(&grid, &analysis);
    print!("{}", report.render(config.format)?);
    if config.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
