use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use log::LevelFilter;
use tracing_subscriber::filter::LevelFilter as TraceLevel;

/// Routes `log` records into an append-only file. The terminal itself is in
/// raw mode while the game runs, so nothing may be written to stderr.
pub fn init(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(to_trace_level(level))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("Error initializing logger")
}

fn to_trace_level(level: LevelFilter) -> TraceLevel {
    match level {
        LevelFilter::Off => TraceLevel::OFF,
        LevelFilter::Error => TraceLevel::ERROR,
        LevelFilter::Warn => TraceLevel::WARN,
        LevelFilter::Info => TraceLevel::INFO,
        LevelFilter::Debug => TraceLevel::DEBUG,
        LevelFilter::Trace => TraceLevel::TRACE,
    }
}
