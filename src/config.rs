//! Runner configuration
//!
//! Both budgets are off by default so an unconfigured run stays unbounded;
//! they exist only for embedders that need to bound a run of untrusted
//! source.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Cooperative instruction budget. `None` means unbounded.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Maximum bytes of `printf` output before the run is aborted.
    #[serde(default)]
    pub max_output_bytes: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { max_steps: None, max_output_bytes: None }
    }
}

impl RunnerConfig {
    /// Parse a config from TOML text (e.g. a `crun.toml` alongside the source).
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
