use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    Layer, Registry,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Maps `-v` counts onto a level; `--quiet` keeps only errors.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Plain-text layer for `--log-file`, with thread ids so placement workers can be told apart.
fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
}

fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).map_err(CliError::Io)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    // Opened first so a bad path fails before the global subscriber is taken.
    let file = log_file.map(open_log_file).transpose()?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = Registry::default()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    match file {
        Some(file) => subscriber.with(file_layer(file)).init(),
        None => subscriber.init(),
    }

    Ok(())
}
