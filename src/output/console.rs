//! Console output utilities.
//!
//! Status messages go to stderr so stdout carries only result records.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the invocation summary shown before fetching.
pub fn print_invocation(function: &str, identifiers: &[String], n: usize) {
    if identifiers.is_empty() {
        eprintln!("{} {} (n = {})", style("Running").bold(), function, n);
    } else {
        eprintln!(
            "{} {} for {} (n = {})",
            style("Running").bold(),
            function,
            identifiers.join(", "),
            n
        );
    }
}
