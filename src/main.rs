//! Restless entry point
//!
//! Parses the CLI, validates configuration, spawns the tick loop, and stops
//! it cleanly on Ctrl-C.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use restless::config::{Config, ConfigError, Direction};
use restless::platform::{self, NoopPointer, SystemPointer, SystemWindows};
use restless::runner;

#[derive(Parser, Debug)]
#[command(
    name = "restless",
    version,
    about = "Moves the mouse pointer continuously and issues periodic clicks"
)]
struct Args {
    /// Movement direction: right, left, up, down, or circular
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Pixels to move per tick
    #[arg(long)]
    distance: Option<f32>,

    /// Seconds between click pairs
    #[arg(long)]
    click_interval: Option<f64>,

    /// Seconds between movements
    #[arg(long)]
    move_interval: Option<f64>,

    /// Constrain movement to the first window whose title contains this text
    #[arg(short, long)]
    window: Option<String>,

    /// Load configuration from a JSON file (flags override file values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log movement without touching the mouse
    #[arg(long)]
    dry_run: bool,

    /// List visible windows and exit
    #[arg(long)]
    list_windows: bool,
}

/// Merge the config file (if any) with command-line overrides
fn build_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(direction) = args.direction {
        config.direction = direction;
    }
    if let Some(distance) = args.distance {
        config.move_distance = distance;
    }
    if let Some(interval) = args.click_interval {
        config.click_interval = interval;
    }
    if let Some(interval) = args.move_interval {
        config.move_interval = interval;
    }
    if let Some(window) = &args.window {
        config.target_window = Some(window.clone());
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list_windows {
        let windows = platform::list_windows();
        if windows.is_empty() {
            println!("no visible windows found");
        }
        for w in windows {
            println!(
                "{} [{}] at ({}, {}) {}x{}",
                w.title, w.app_name, w.x, w.y, w.width, w.height
            );
        }
        return ExitCode::SUCCESS;
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("starting mouse activity");
    log::info!("  direction:      {}", config.direction.as_str());
    log::info!("  move distance:  {} px", config.move_distance);
    log::info!("  click interval: {} s", config.click_interval);
    log::info!("  move interval:  {} s", config.move_interval);
    match &config.target_window {
        Some(title) => log::info!("  target window:  '{title}'"),
        None => log::info!("  target window:  none (unconstrained)"),
    }

    let handle = if args.dry_run {
        log::info!("dry run: the mouse will not move");
        runner::spawn(config, || (NoopPointer, SystemWindows))
    } else {
        runner::spawn(config, || (SystemPointer::new(), SystemWindows))
    };

    log::info!("press Ctrl-C to stop");
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to wait for Ctrl-C: {e}");
    }

    log::info!("stopping...");
    let ticks = handle.stop();
    log::info!("stopped after {ticks} ticks");

    ExitCode::SUCCESS
}
