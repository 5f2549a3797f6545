// Core configuration types
mod core;
mod loader;

pub use self::core::{VecfmtConfig, CONFIG_FILE_NAME, DEFAULT_SAMPLE};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config};
