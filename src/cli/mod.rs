//! Command-line interface.
//!
//! Provides:
//! - Argument parsing
//! - Validation of a function call and dispatch to the lookup functions

pub mod args;
pub mod dispatch;

pub use args::{Args, Function};
pub use dispatch::{run_function, IdentifierKind, Invocation};
