use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn filter(default: tracing::Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("reqwest=warn".parse()?))
}

/// Log to stderr. `RUST_LOG` overrides `default`.
pub fn init_stderr(default: tracing::Level) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_writer(std::io::stderr))
        .with(filter(default)?)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Log to a file, for the full-screen client where stderr is the terminal.
pub fn init_file(path: &Path, default: tracing::Level) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter(default)?)
        .try_init()
        .context("Failed to install tracing subscriber")
}
