//! Result and download statistics reporting.

use console::style;

use crate::download::DownloadSummary;

/// Print the one-line count summary shown when results are neither printed
/// nor written to a file.
pub fn print_result_count(function: &str, count: usize) {
    println!(
        "{} returned {} {}",
        function,
        style(count).green(),
        if count == 1 { "record" } else { "records" }
    );
}

/// Print the outcome of a download batch.
pub fn print_download_summary(summary: &DownloadSummary) {
    eprintln!();
    eprintln!("{}", style("Download summary:").bold());
    eprintln!("  Directory:  {}", summary.directory.display());
    eprintln!("  Videos:     {}", summary.total());
    eprintln!("  Downloaded: {}", style(summary.downloaded).green());
    eprintln!("  Skipped:    {} (no play address or already present)", summary.skipped);
    if summary.failed > 0 {
        eprintln!("  Failed:     {}", style(summary.failed).red());
    }
}
