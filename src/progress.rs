use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const BAR_CHARS: &str = "█▓░";

/// Create a progress bar that tracks how many rows have been processed. When
/// the total is unknown the bar falls back to a spinner that still tracks the
/// row count.
pub fn count_progress_bar(
    label: impl Into<String>,
    unit_label: &str,
    total_items: Option<u64>,
) -> ProgressBar {
    let label = label.into();
    let pb = match total_items {
        Some(total) => {
            let pb = ProgressBar::new(total);
            let template = format!(
                "{{prefix:.bold.dim}} {{spinner:.green}} [{{elapsed_precise}}] {{wide_bar:.cyan/blue}} {{pos}}/{{len}} {unit_label} {{msg}}",
            );
            pb.set_style(
                ProgressStyle::with_template(&template)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars(BAR_CHARS),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            let template = format!(
                "{{prefix:.bold.dim}} {{spinner:.green}} [{{elapsed_precise}}] {{pos}} {unit_label} read {{msg}}",
            );
            pb.set_style(
                ProgressStyle::with_template(&template)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        }
    };
    pb.set_prefix(label);
    pb.enable_steady_tick(Duration::from_millis(75));
    pb
}
