use serde::Deserialize;

use crate::common::DEFAULT_DATA_MEMORY_WORDS;

/// Top-level simulator configuration, loaded from a TOML file.
///
/// Every field has a default, so a partial file (or none at all) works.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub memory: MemoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            memory: MemoryConfig::default(),
        }
    }
}

/// General simulation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print per-cycle stage contents and architectural state.
    pub trace_stages: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_stages: default_trace_stages(),
        }
    }
}

/// Memory sizing settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of data-memory words.
    pub data_memory_size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_memory_size: default_data_memory_size(),
        }
    }
}

fn default_trace_stages() -> bool {
    true
}

fn default_data_memory_size() -> usize {
    DEFAULT_DATA_MEMORY_WORDS
}
