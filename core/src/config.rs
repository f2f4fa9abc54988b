use crate::{catalog::BuffPolicy, types::MAX_ARRIVAL_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// File name suggested by the save prompt.
    pub default_file_name:   String,
    /// Upper bound of the arrival-time input, in seconds.
    pub max_arrival_seconds: f64,
    pub buff_policy:         BuffPolicy,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_file_name:   "monsters.dat".into(),
            max_arrival_seconds: MAX_ARRIVAL_SECONDS,
            buff_policy:         BuffPolicy::AcceptAny,
        }
    }
}

impl ToolConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: ToolConfig = serde_json::from_str(&content)?;
        anyhow::ensure!(
            config.max_arrival_seconds.is_finite() && config.max_arrival_seconds >= 0.0,
            "max_arrival_seconds must be a non-negative number, got {}",
            config.max_arrival_seconds
        );
        log::info!(
            "config: loaded {} (buff_policy={:?}, max_arrival_seconds={})",
            path.display(),
            config.buff_policy,
            config.max_arrival_seconds
        );
        Ok(config)
    }
}
