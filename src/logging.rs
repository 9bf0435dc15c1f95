use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Install the global `tracing` subscriber.
///
/// With `log_file`, events are appended to that file without ANSI colors; otherwise they go to
/// stderr. An already installed subscriber is left in place and `Ok(false)` is returned.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let builder = fmt()
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_max_level(Level::DEBUG);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir '{}'", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file '{}'", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None => builder.with_writer(std::io::stderr).try_init().is_ok(),
    };
    if !installed {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
    Ok(installed)
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
