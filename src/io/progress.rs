//! Terminal spinner shown while a puzzle is being searched

use crate::io::configuration::SPINNER_TICK_MS;
use crate::solver::backtrack::SearchStats;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner covering one solve run
///
/// The search runs on the calling thread; the spinner redraws itself on a
/// steady tick until [`SolveProgress::finish`] is called.
pub struct SolveProgress {
    spinner: ProgressBar,
}

impl SolveProgress {
    /// Start a spinner for the puzzle at `path`
    pub fn start(path: &Path, dimensions: (usize, usize)) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        spinner.set_message(format!(
            "Solving {display_name} ({}x{})",
            dimensions.0, dimensions.1
        ));
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { spinner }
    }

    /// Stop the spinner, leaving a one-line summary of the search
    pub fn finish(&self, solved: bool, stats: SearchStats, elapsed: Duration) {
        let verdict = if solved { "✓ Solved" } else { "✗ No solution" };
        self.spinner.finish_with_message(format!(
            "{verdict} after {} attempts, {} backtracks in {:.3}s",
            stats.attempts,
            stats.backtracks,
            elapsed.as_secs_f64()
        ));
    }

    /// Remove the spinner without a summary
    pub fn abandon(&self) {
        self.spinner.finish_and_clear();
    }
}
