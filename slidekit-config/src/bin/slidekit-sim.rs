use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use slidekit_config::{
    ConfigLoader, Simulation, StepReport, script::load_script,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "slidekit-sim",
    about = "Replay pointer, click and resize scripts against a headless gallery"
)]
struct Cli {
    /// TOML or JSON configuration file. Overrides $SLIDEKIT_CONFIG_PATH.
    #[arg(long)]
    config: Option<PathBuf>,
    /// .env file to load before reading SLIDEKIT_* variables
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Container width in pixels
    #[arg(long)]
    width: Option<f32>,
    /// Number of slides in the simulated host
    #[arg(long)]
    slides: Option<usize>,
    /// JSON array of `{ "at_ms": .., "event": { "type": .. } }` steps
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Extra virtual time to run after the last step, e.g. "12s"
    #[arg(long, value_parser = humantime::parse_duration)]
    settle: Option<Duration>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    let load = loader
        .load()
        .context("failed to load slidekit configuration")?;

    let slides = cli.slides.unwrap_or(load.config.host.slides);
    let width = cli.width.unwrap_or(load.config.host.width);
    let steps = match &cli.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    tracing::info!(
        slides,
        width,
        steps = steps.len(),
        source = %load.source,
        "starting simulation"
    );

    let mut sim = Simulation::new(slides, width, load.config.settings())
        .context("failed to initialize gallery")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &sim.initial_report(), cli.format)?;
    for step in &steps {
        let report = sim.step(step);
        emit(&mut out, &report, cli.format)?;
    }
    if let Some(settle) = cli.settle {
        let report = sim.settle(settle);
        emit(&mut out, &report, cli.format)?;
    }

    let teardown = sim.finish();
    if !teardown.is_clean() {
        bail!(
            "teardown leaked {} subscription(s) and {} timer(s), {} stale unsubscribe(s)",
            teardown.live_subscriptions,
            teardown.pending_timers,
            teardown.stale_unsubscribes
        );
    }
    tracing::info!("gallery torn down cleanly");
    Ok(())
}

fn emit(
    out: &mut impl Write,
    report: &StepReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.to_text())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
