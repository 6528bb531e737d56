//! Thermal sensor capture tool.
//!
//! One run does two things, in order:
//! 1. Fetch a 24×32 frame from the sensor and append it to the CSV log.
//!    A failed fetch is logged and persistence is skipped for the run.
//! 2. Re-render every logged row as a false-color PNG figure.

mod config;
mod fetch;
mod render;
mod store;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::CaptureConfig;
use fetch::SensorClient;
use store::FrameLog;
use thermal_render::FigureLayout;

#[derive(Parser, Debug)]
#[command(name = "capture")]
#[command(about = "Thermal sensor capture: fetch one frame, log it, render all logged frames")]
struct Args {
    /// Sensor frame endpoint
    #[arg(long, env = "SENSOR_URL", default_value = "http://192.168.0.14/save")]
    sensor_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Path of the append-only frame log
    #[arg(long, env = "THERMAL_LOG", default_value = "thermal_data.csv")]
    log_file: PathBuf,

    /// Directory for rendered images
    #[arg(long, env = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Pixels per frame cell in rendered images
    #[arg(long, default_value = "16")]
    cell_size: u32,

    /// Skip the fetch step and only re-render the log
    #[arg(long)]
    render_only: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CaptureConfig {
        sensor_url: args.sensor_url,
        request_timeout: Duration::from_secs(args.timeout_secs),
        log_file: args.log_file,
        output_dir: args.output_dir,
        layout: FigureLayout {
            cell_size: args.cell_size,
            ..FigureLayout::default()
        },
        render_only: args.render_only,
    };

    run(&config)
}

fn run(config: &CaptureConfig) -> Result<()> {
    let log = FrameLog::new(&config.log_file);

    if !config.render_only {
        let client = SensorClient::new(config.sensor_url.clone(), config.request_timeout)
            .context("failed to create sensor client")?;

        match client.fetch_frame() {
            Ok(values) => {
                // Log I/O failure is fatal for the run
                log.append(&values)
                    .context("failed to append frame to log")?;
                info!(readings = values.len(), "Frame logged");
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed, nothing appended this run");
            }
        }
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let summary = render::render_all(&log, &config.output_dir, &config.layout)?;
    info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        "Capture run complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_appends_nothing_and_still_renders() {
        let dir = tempfile::tempdir().unwrap();

        let config = CaptureConfig {
            // Nothing listens here; the fetch fails at the transport level
            sensor_url: "http://127.0.0.1:1/save".to_string(),
            request_timeout: Duration::from_secs(1),
            log_file: dir.path().join("thermal_data.csv"),
            output_dir: dir.path().join("images"),
            ..CaptureConfig::default()
        };

        run(&config).unwrap();

        assert!(!config.log_file.exists());
        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }
}
