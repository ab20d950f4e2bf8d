//! Progress monitoring and performance tracking

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

/// Performance metrics for a search run
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    /// Masks completed so far
    pub masks_completed: u64,
    /// Windows examined so far (masks * windows per mask)
    pub windows_examined: u64,
    /// Masks processed per second
    pub masks_per_second: f64,
    /// Windows processed per second
    pub windows_per_second: f64,
    /// Total time elapsed
    pub elapsed_time: Duration,
    /// Estimated time remaining
    pub estimated_remaining: Option<Duration>,
    /// Whether a match has been recorded
    pub match_found: bool,
}

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Whether to show a progress bar
    pub show_progress_bar: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            show_progress_bar: true,
        }
    }
}

/// Monitor for tracking sweep progress across masks
#[derive(Debug)]
pub struct ScanMonitor {
    total_masks: u64,
    windows_per_mask: u64,
    masks: AtomicU64,
    match_found: AtomicBool,
    start_time: Mutex<Instant>,
    progress_bar: Option<ProgressBar>,
}

impl ScanMonitor {
    /// Create a monitor for a space of `total_masks` masks, each
    /// covering `windows_per_mask` windows.
    pub fn new(total_masks: u64, windows_per_mask: u64, config: MonitorConfig) -> Self {
        let progress_bar = if config.show_progress_bar {
            let pb = ProgressBar::new(total_masks);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} masks ({percent}%) {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("scanning");
            Some(pb)
        } else {
            None
        };

        Self {
            total_masks,
            windows_per_mask,
            masks: AtomicU64::new(0),
            match_found: AtomicBool::new(false),
            start_time: Mutex::new(Instant::now()),
            progress_bar,
        }
    }

    /// Reset the clock; call right before the sweep starts
    pub fn start(&self) {
        if let Ok(mut start_time) = self.start_time.lock() {
            *start_time = Instant::now();
        }
        if let Some(pb) = &self.progress_bar {
            pb.reset();
        }
    }

    /// Record the number of masks completed so far
    pub fn update_masks(&self, masks_completed: u64) {
        self.masks.store(masks_completed, Ordering::SeqCst);

        if let Some(pb) = &self.progress_bar {
            pb.set_position(masks_completed);
            let metrics = self.metrics();
            pb.set_message(format!(
                "{} windows",
                utils::format_rate(metrics.windows_per_second)
            ));
        }
    }

    /// Record that the target was found
    pub fn record_match(&self) {
        self.match_found.store(true, Ordering::SeqCst);
        info!("match recorded after {} masks", self.masks_completed());
    }

    /// Finish the progress bar with a terminal message
    pub fn finish(&self, message: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }

    pub fn masks_completed(&self) -> u64 {
        self.masks.load(Ordering::SeqCst)
    }

    pub fn has_match(&self) -> bool {
        self.match_found.load(Ordering::SeqCst)
    }

    /// Completion percentage over the mask space
    pub fn completion_percentage(&self) -> f64 {
        if self.total_masks == 0 {
            return 0.0;
        }
        (self.masks_completed() as f64 / self.total_masks as f64) * 100.0
    }

    /// Snapshot of current performance metrics
    pub fn metrics(&self) -> ScanMetrics {
        let masks_completed = self.masks_completed();
        let windows_examined = masks_completed * self.windows_per_mask;
        let elapsed = self
            .start_time
            .lock()
            .map(|t| t.elapsed())
            .unwrap_or_default();

        let masks_per_second = if elapsed.as_secs_f64() > 0.0 {
            masks_completed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let estimated_remaining = if masks_per_second > 0.0 {
            let remaining = self.total_masks.saturating_sub(masks_completed);
            Some(Duration::from_secs_f64(remaining as f64 / masks_per_second))
        } else {
            None
        };

        ScanMetrics {
            masks_completed,
            windows_examined,
            masks_per_second,
            windows_per_second: masks_per_second * self.windows_per_mask as f64,
            elapsed_time: elapsed,
            estimated_remaining,
            match_found: self.has_match(),
        }
    }

    /// Log a progress line, for runs without a progress bar
    pub fn log_progress(&self) {
        let metrics = self.metrics();
        info!(
            "Progress: {}/{} masks ({:.1}%), {} windows, Rate: {}, Elapsed: {}",
            metrics.masks_completed,
            self.total_masks,
            self.completion_percentage(),
            utils::format_number(metrics.windows_examined),
            utils::format_rate(metrics.windows_per_second),
            utils::format_duration(metrics.elapsed_time),
        );
    }
}

/// Utility functions for monitoring
pub mod utils {
    use std::time::Duration;

    /// Format duration in human-readable form
    pub fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Format large numbers with commas
    pub fn format_number(num: u64) -> String {
        let num_str = num.to_string();
        let mut result = String::new();

        for (i, c) in num_str.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    /// Format rate with appropriate units
    pub fn format_rate(rate: f64) -> String {
        if rate >= 1_000_000.0 {
            format!("{:.1}M/s", rate / 1_000_000.0)
        } else if rate >= 1_000.0 {
            format!("{:.1}K/s", rate / 1_000.0)
        } else {
            format!("{:.0}/s", rate)
        }
    }
}
