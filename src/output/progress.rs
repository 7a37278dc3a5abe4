//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

const ITEM_TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Create a progress bar counting items of a batch.
pub fn create_item_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template(ITEM_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_message(message.to_string());
    bar
}
