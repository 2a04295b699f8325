//! Progress display for gallery render passes

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks cells drawn during one render pass
///
/// A hidden bar is used when progress output is suppressed, so callers can
/// report unconditionally.
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a visible bar for `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        let bar = ProgressBar::new(cell_count as u64);
        bar.set_style(CELL_STYLE.clone());
        bar.set_message("Rendering trees");
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden(cell_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(cell_count as u64);
        Self { bar }
    }

    /// Record that the cell at `index` has been drawn
    pub fn cell_drawn(&self, index: usize) {
        self.bar.set_message(format!("Rendering cell {index}"));
        self.bar.inc(1);
    }

    /// Number of cells reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
