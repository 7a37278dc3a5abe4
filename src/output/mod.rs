//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Logging setup
//! - Record printing and JSON files
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod logging;
pub mod progress;
pub mod records;
pub mod stats;

pub use self::console::{print_error, print_info, print_invocation, print_success, print_warning};
pub use logging::{build_subscriber, init_logging};
pub use progress::create_item_bar;
pub use records::{print_records, render_records, write_json};
pub use stats::{print_download_summary, print_result_count};
