//! Diagnostics sink threaded explicitly through loading, rendering and saving.
//!
//! Nothing in the library logs through globals: every "continue on error" decision is reported
//! to the [`Diagnostics`] passed in by the caller. [`TracingDiagnostics`] forwards to `tracing`;
//! [`CollectingDiagnostics`] keeps the events in memory.

use std::path::{Path, PathBuf};

use crate::foundation::error::BannerError;
use crate::render::compositor::Placement;

/// Receiver of per-row, per-item and per-group outcomes.
pub trait Diagnostics {
    /// A configuration row (0-based) was skipped.
    fn row_rejected(&mut self, row: usize, err: &BannerError);

    /// A group is about to be rendered from `base_image`.
    fn group_started(&mut self, _group: &str, _base_image: &Path) {}

    /// A text item was drawn.
    fn item_rendered(&mut self, _group: &str, _index: usize, _placement: &Placement) {}

    /// A text item failed; rendering continues with the next item.
    fn item_failed(&mut self, group: &str, index: usize, err: &BannerError);

    /// A finished group was written to `output`.
    fn group_written(&mut self, _group: &str, _output: &Path) {}

    /// A whole group produced no output.
    fn group_failed(&mut self, group: &str, err: &BannerError);
}

/// Forwards every event to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn row_rejected(&mut self, row: usize, err: &BannerError) {
        tracing::error!(row, "{err}");
    }

    fn group_started(&mut self, group: &str, base_image: &Path) {
        tracing::info!(group, "Current File:\"{}\"", base_image.display());
    }

    fn item_rendered(&mut self, group: &str, index: usize, placement: &Placement) {
        tracing::debug!(
            group,
            index,
            x = placement.location.x,
            y = placement.location.y,
            border_stamps = placement.border_stamps,
            "text item drawn"
        );
    }

    fn item_failed(&mut self, group: &str, index: usize, err: &BannerError) {
        tracing::error!(group, index, "{err}");
    }

    fn group_written(&mut self, group: &str, output: &Path) {
        tracing::info!(group, "Output File:\"{}\"", output.display());
        tracing::info!("-----------------------");
    }

    fn group_failed(&mut self, group: &str, err: &BannerError) {
        tracing::error!(group, "{err}");
    }
}

/// One recorded diagnostics event. Errors are kept as their display strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    RowRejected { row: usize, message: String },
    GroupStarted { group: String, base_image: PathBuf },
    ItemRendered { group: String, index: usize },
    ItemFailed { group: String, index: usize, message: String },
    GroupWritten { group: String, output: PathBuf },
    GroupFailed { group: String, message: String },
}

/// Records events in order; used by tests and by callers that want a summary instead of logs.
#[derive(Clone, Debug, Default)]
pub struct CollectingDiagnostics {
    pub events: Vec<DiagnosticEvent>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed_items(&self) -> Vec<(String, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::ItemFailed { group, index, .. } => Some((group.clone(), *index)),
                _ => None,
            })
            .collect()
    }

    pub fn rejected_rows(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::RowRejected { row, .. } => Some(*row),
                _ => None,
            })
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn row_rejected(&mut self, row: usize, err: &BannerError) {
        self.events.push(DiagnosticEvent::RowRejected {
            row,
            message: err.to_string(),
        });
    }

    fn group_started(&mut self, group: &str, base_image: &Path) {
        self.events.push(DiagnosticEvent::GroupStarted {
            group: group.to_string(),
            base_image: base_image.to_path_buf(),
        });
    }

    fn item_rendered(&mut self, group: &str, index: usize, _placement: &Placement) {
        self.events.push(DiagnosticEvent::ItemRendered {
            group: group.to_string(),
            index,
        });
    }

    fn item_failed(&mut self, group: &str, index: usize, err: &BannerError) {
        self.events.push(DiagnosticEvent::ItemFailed {
            group: group.to_string(),
            index,
            message: err.to_string(),
        });
    }

    fn group_written(&mut self, group: &str, output: &Path) {
        self.events.push(DiagnosticEvent::GroupWritten {
            group: group.to_string(),
            output: output.to_path_buf(),
        });
    }

    fn group_failed(&mut self, group: &str, err: &BannerError) {
        self.events.push(DiagnosticEvent::GroupFailed {
            group: group.to_string(),
            message: err.to_string(),
        });
    }
}
