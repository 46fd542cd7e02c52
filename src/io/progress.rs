//! Console reporting for the batch: status lines plus a single progress bar

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static ASSET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.yellow/red}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Prints status lines and tracks how many assets are done
///
/// Every status line is kept in order, quiet or not. Lines are printed to
/// stdout with the bar suspended; a quiet reporter only records them.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    lines: Vec<String>,
    completed: usize,
}

impl ProgressReporter {
    /// Create a reporter for `asset_count` assets
    pub fn new(asset_count: usize, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(asset_count as u64);
            bar.set_style(ASSET_STYLE.clone());
            bar
        });
        Self {
            bar,
            lines: Vec::with_capacity(asset_count * 2 + 2),
            completed: 0,
        }
    }

    /// Status lines emitted so far, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Announce the start of the batch
    pub fn begin(&mut self) {
        self.line("Generating placeholder graphics...".to_string());
    }

    /// Announce that `file_name` is being rendered
    pub fn start_asset(&mut self, file_name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(file_name.to_string());
        }
        self.line(format!("Generating {file_name}..."));
    }

    /// Record a finished file and advance the bar
    pub fn complete_asset(&mut self, file_name: &str, elapsed: Duration) {
        self.completed += 1;
        self.line(format!("Created {file_name}"));
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{file_name} ({}ms)", elapsed.as_millis()));
            bar.inc(1);
        }
    }

    /// Close the bar and print the summary
    pub fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        self.line(format!(
            "All {} graphics created successfully!",
            self.completed
        ));
    }

    // Allow print for user feedback; the bar is suspended while the line is written
    #[allow(clippy::print_stdout)]
    fn line(&mut self, text: String) {
        if let Some(bar) = &self.bar {
            bar.suspend(|| println!("{text}"));
        }
        self.lines.push(text);
    }
}
