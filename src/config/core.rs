use serde::Deserialize;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".vecfmt.toml";

/// Values printed when neither the command line nor a config file supplies any
pub const DEFAULT_SAMPLE: [f64; 4] = [1.23456789, 2.0, 3.14159, 0.000123456789];

/// Root configuration structure for vecfmt
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct VecfmtConfig {
    /// Sample values to format when none are given on the command line
    #[serde(default)]
    pub values: Option<Vec<f64>>,
}

impl VecfmtConfig {
    /// Values to format, falling back to [`DEFAULT_SAMPLE`]
    pub fn sample(&self) -> Vec<f64> {
        self.values
            .clone()
            .unwrap_or_else(|| DEFAULT_SAMPLE.to_vec())
    }
}
