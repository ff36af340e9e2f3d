use std::path::Path;

use anyhow::Result;

use crate::chart::{Panel, compose_dashboard};
use crate::data::export;
use crate::data::loader::LoadedLog;
use crate::data::smooth::{WindowSize, WindowSizeError, smooth};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// Each user interaction goes through one method here, which rebuilds the
/// derived charts from scratch.
pub struct AppState {
    /// Loaded log (None until the user opens a file).
    pub log: Option<LoadedLog>,

    /// Moving-average window.
    pub window: WindowSize,

    /// Charts for the current log and window, in display order.
    pub panels: Vec<Panel>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            log: None,
            window: WindowSize::default(),
            panels: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Replace the current log with a freshly loaded one.
    pub fn set_log(&mut self, loaded: LoadedLog) {
        log::info!(
            "Loaded {}: {} records, {} lines skipped",
            loaded.source,
            loaded.table.len(),
            loaded.skipped_lines()
        );
        self.log = Some(loaded);
        self.status_message = None;
        self.recompute();
    }

    /// Record a failed load; the previously loaded log stays on screen.
    pub fn set_load_error(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load file: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }

    pub fn set_window_size(&mut self, size: usize) -> Result<(), WindowSizeError> {
        let window = WindowSize::new(size)?;
        if window != self.window {
            log::debug!("Window size {} -> {}", self.window, window);
            self.window = window;
            self.recompute();
        }
        Ok(())
    }

    /// Drop the loaded log and return to the idle state.
    pub fn clear(&mut self) {
        self.log = None;
        self.status_message = None;
        self.recompute();
    }

    /// Write the current table and its moving averages as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let Some(loaded) = &self.log else {
            anyhow::bail!("no log loaded");
        };
        let smoothed = smooth(&loaded.table, self.window);
        export::export_csv(path, &loaded.table, &smoothed)?;
        log::info!(
            "Exported {} rows (window {}) to {}",
            loaded.table.len(),
            smoothed.window,
            path.display()
        );
        Ok(())
    }

    fn recompute(&mut self) {
        self.panels = match &self.log {
            Some(loaded) => {
                log::debug!(
                    "Recomputing charts for {} rows, window {}",
                    loaded.table.len(),
                    self.window
                );
                compose_dashboard(&loaded.table, self.window)
            }
            None => Vec::new(),
        };
    }
}
