//! Headless host for the accessibility experience.
//!
//! Reads a script of host events (one JSON object per line), drives the
//! experience core with them and prints every resulting effect as JSON on
//! stdout. Logs go to stderr.

mod app;
mod config;

use crate::app::{App, run_script};
use crate::config::{load_config, serialize_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

enum Command {
    /// Run a script of host events.
    Run { script: PathBuf, config: PathBuf },
    /// Print the effective configuration as TOML.
    PrintConfig { config: PathBuf },
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    match parse_args()? {
        Command::PrintConfig { config } => {
            let config = load_config(&config);
            print!("{}", serialize_config(&config)?);
            Ok(())
        }
        Command::Run { script, config: config_path } => {
            let config = load_config(&config_path);
            set_log_level(reload_handle, config.log_level.as_filter_str());
            info!(
                script = %script.display(),
                config = %config_path.display(),
                level = %config.log_level,
                "Starting experience host"
            );

            let file = File::open(&script)
                .with_context(|| format!("opening script {}", script.display()))?;
            let mut app = App::bootstrap(config)?;
            let stdout = io::stdout();
            run_script(&mut app, BufReader::new(file), stdout.lock())
        }
    }
}

fn parse_args() -> Result<Command> {
    const USAGE: &str = "Usage: experience-a11y <script.jsonl> [config.toml]\n       \
                         experience-a11y --print-config [config.toml]";
    let mut args = env::args().skip(1);
    let first = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let config = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    if first == "--print-config" {
        return Ok(Command::PrintConfig { config });
    }
    let script = PathBuf::from(first);
    if !script.exists() {
        return Err(anyhow!("File not found: {}", script.display()));
    }
    Ok(Command::Run { script, config })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
