// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod observability;

// Re-export commonly used types
pub use crate::config::VecfmtConfig;
pub use crate::errors::{Error, Result};
pub use crate::formatting::{
    format_scientific, format_values, write_values, ScientificList, MAX_DIGITS10,
};
