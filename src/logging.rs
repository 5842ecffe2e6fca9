use crate::config::Settings;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Fails if the log file's directory cannot be created.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> io::Result<()> {
    // RUST_LOG wins over the verbose flag
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ytrello={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, file_name) = split_log_path(&log_path);
        std::fs::create_dir_all(&dir)?;

        // Rotated daily: <dir>/<file_name>.YYYY-MM-DD
        let file_appender = tracing_appender::rolling::daily(dir, file_name);

        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false) // No colors in file
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
    Ok(())
}

/// Directory and file name for the rolling appender.
fn split_log_path(log_path: &Path) -> (PathBuf, OsString) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("ytrello.log"));
    (dir, file_name)
}

/// Write `msg` as one line to `out` when `verbose` is set; otherwise do nothing.
pub fn debug_to(out: &mut impl Write, verbose: bool, msg: &str) -> io::Result<()> {
    if verbose {
        writeln!(out, "{}", msg)?;
    }
    Ok(())
}

/// Print a debug message to stderr if the run is verbose.
pub fn debug(settings: &Settings, msg: &str) {
    let _ = debug_to(&mut io::stderr().lock(), settings.verbose, msg);
}
