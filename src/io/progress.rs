//! Batch progress tracking across puzzle files

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Puzzles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch operations
///
/// A bar is only drawn once there are enough files for it to be useful.
/// Result lines go through the manager so they do not tear the bar.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the display for a batch of files
    pub fn initialize(&mut self, file_count: usize) {
        self.completed = 0;
        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show the file currently being solved
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.to_string());
        }
    }

    /// Mark the current file as done
    pub fn complete_file(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Files completed since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Print a result line to stdout without disturbing the bar
    // Allow print for per-file results
    #[allow(clippy::print_stdout)]
    pub fn println(&self, line: &str) {
        match self.bar {
            Some(ref bar) => bar.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
