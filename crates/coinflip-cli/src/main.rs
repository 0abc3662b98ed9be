//! Coinflip runner entry point.

use std::error::Error;
use std::io::Write;

use coinflip_cli::config::Config;
use coinflip_cli::report;
use coinflip_core::rng::UniformBitSource;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        bound = config.bound.get(),
        iterations = config.iterations.get(),
        seed = ?config.seed,
        "starting coinflip run"
    );

    let mut source = match config.seed {
        Some(seed) => UniformBitSource::seeded(seed),
        None => UniformBitSource::from_os_rng(),
    };

    let run_report = report::run(&config, &mut source)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &run_report)?;
    writeln!(stdout)?;

    Ok(())
}
