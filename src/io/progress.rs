//! Per-seed pass progress with a batch bar for long seed lists

use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::algorithm::executor::Pass;
use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

// Display state of one seed: label, finished passes, current pass label
#[derive(Debug, Clone, Default)]
struct SeedState {
    label: String,
    passes_done: usize,
    stage: &'static str,
}

/// Coordinates progress display for a batch of seeds
///
/// Shows one bar per recent seed, counting finished passes. When more seeds are
/// queued than fit on screen a batch bar is added and the per-seed bars roll
/// over to the latest seeds.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    seed_bars: Vec<ProgressBar>,
    seed_states: Vec<SeedState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Seeds: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            seed_bars: Vec::new(),
            seed_states: Vec::new(),
        }
    }

    /// Create bars for `seed_count` seeds
    pub fn initialize(&mut self, seed_count: usize) {
        if seed_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(seed_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..seed_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(Pass::COUNT as u64);
            bar.set_style(PASS_STYLE.clone());
            self.seed_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Start tracking the seed at `index`
    pub fn start_seed(&mut self, index: usize, label: &str) {
        if index >= self.seed_states.len() {
            self.seed_states.resize_with(index + 1, SeedState::default);
        }
        if let Some(state) = self.seed_states.get_mut(index) {
            *state = SeedState {
                label: label.to_string(),
                passes_done: 0,
                stage: Pass::Big.label(),
            };
        }
        self.update_bars();
    }

    /// Record that the seed at `index` is about to run `next`
    pub fn update_pass(&mut self, index: usize, next: Pass) {
        if let Some(state) = self.seed_states.get_mut(index) {
            state.passes_done = next.ordinal();
            state.stage = next.label();
        }
        self.update_bars();
    }

    /// Mark the seed at `index` as written
    pub fn complete_seed(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.seed_states.get_mut(index) {
            state.label = format!("✓ {}", state.label);
            state.passes_done = Pass::COUNT;
            state.stage = "written";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All seeds rendered");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the latest seeds on the available bars
    fn update_bars(&self) {
        let active: Vec<&SeedState> = self
            .seed_states
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.seed_bars.iter().zip(visible) {
            bar.set_position(state.passes_done as u64);
            bar.set_prefix(state.label.clone());
            bar.set_message(state.stage);
        }

        for bar in self.seed_bars.iter().skip(visible.len()) {
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
