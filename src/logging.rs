//! Tracing setup.
//!
//! The full-screen UI owns the terminal, so in that mode logs go to a file;
//! headless commands log to stderr. `RUST_LOG` overrides the default `info`
//! filter in both cases.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<data_local_dir>/mintterm/mintterm.log`, or the current directory when
/// the platform has no data dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mintterm")
        .join("mintterm.log")
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init_tracing(target: LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
    }
    Ok(())
}
