//! Logging setup for the vecfmt binary.
//!
//! All diagnostics go to stderr through `tracing`, so stdout carries only
//! the formatted values.
//!
//! ```ignore
//! use vecfmt::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbosity);
//! }
//! ```

pub mod tracing;

pub use self::tracing::{init_tracing, level_for_verbosity};
