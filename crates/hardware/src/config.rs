//! Configuration system for the pipeline simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants for memory size, cache geometry, latencies, and the step cap.
//! 2. **Structures:** Hierarchical config for general, memory, cache, and pipeline settings.
//! 3. **Validation:** Consistency checks run before a simulator is built.
//!
//! Configuration is supplied as JSON (see `Config::from_json`) or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{DEFAULT_MAX_STEPS, DEFAULT_MEMORY_WORDS, SimError, SimResult};

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not
/// explicitly overridden in a JSON configuration.
mod defaults {
    /// Main memory size in words.
    pub const MEMORY_WORDS: usize = super::DEFAULT_MEMORY_WORDS;

    /// Number of direct-mapped cache lines.
    pub const CACHE_LINES: usize = 64;

    /// Cache hit latency in cycles.
    pub const HIT_LATENCY: u64 = 1;

    /// Cache miss latency in cycles.
    ///
    /// Covers the main memory round trip on a line fill.
    pub const MISS_LATENCY: u64 = 10;

    /// Safety cap on simulated steps.
    pub const MAX_STEPS: u64 = super::DEFAULT_MAX_STEPS;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.cache.num_lines, 64);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use pipesim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_steps": 5000 },
///     "cache": { "num_lines": 4, "hit_latency": 1, "miss_latency": 20 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, 5000);
/// assert_eq!(config.cache.num_lines, 4);
/// assert_eq!(config.memory.size_words, 1 << 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Pipeline timing configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the settings describe a buildable simulator.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidConfig` when memory or the cache is empty, when
    /// the cache has more lines than memory has words, when a hit is not
    /// strictly cheaper than a miss, or when the step cap is zero.
    pub fn validate(&self) -> SimResult<()> {
        if self.memory.size_words == 0 {
            return Err(SimError::InvalidConfig("memory.size_words must be > 0".into()));
        }
        if self.memory.size_words > u32::MAX as usize {
            return Err(SimError::InvalidConfig(
                "memory.size_words must fit in a 32-bit address".into(),
            ));
        }
        if self.cache.num_lines == 0 {
            return Err(SimError::InvalidConfig("cache.num_lines must be > 0".into()));
        }
        if self.cache.num_lines > self.memory.size_words {
            return Err(SimError::InvalidConfig(format!(
                "cache.num_lines ({}) must not exceed memory.size_words ({})",
                self.cache.num_lines, self.memory.size_words
            )));
        }
        if self.cache.hit_latency >= self.cache.miss_latency {
            return Err(SimError::InvalidConfig(format!(
                "cache.hit_latency ({}) must be less than cache.miss_latency ({})",
                self.cache.hit_latency, self.cache.miss_latency
            )));
        }
        if self.general.max_steps == 0 {
            return Err(SimError::InvalidConfig("general.max_steps must be > 0".into()));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a per-cycle pipeline diagram at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Step cap for `Simulator::run`; exceeding it is a runaway-program error
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,

    /// Treat unrecognized opcodes as fatal instead of executing them as NOP
    #[serde(default)]
    pub strict_opcodes: bool,
}

impl GeneralConfig {
    /// Returns the default step cap.
    fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_steps: defaults::MAX_STEPS,
            strict_opcodes: false,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Memory size in 32-bit words
    #[serde(default = "MemoryConfig::default_size_words")]
    pub size_words: usize,
}

impl MemoryConfig {
    /// Returns the default memory size in words.
    fn default_size_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Direct-mapped cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Number of one-word lines (`index = addr % num_lines`)
    #[serde(default = "CacheConfig::default_num_lines")]
    pub num_lines: usize,

    /// Latency reported on a hit, in cycles
    #[serde(default = "CacheConfig::default_hit_latency")]
    pub hit_latency: u64,

    /// Latency reported on a miss, in cycles
    #[serde(default = "CacheConfig::default_miss_latency")]
    pub miss_latency: u64,
}

impl CacheConfig {
    /// Returns the default number of cache lines.
    fn default_num_lines() -> usize {
        defaults::CACHE_LINES
    }

    /// Returns the default hit latency in cycles.
    fn default_hit_latency() -> u64 {
        defaults::HIT_LATENCY
    }

    /// Returns the default miss latency in cycles.
    fn default_miss_latency() -> u64 {
        defaults::MISS_LATENCY
    }
}

impl Default for CacheConfig {
    /// Creates a default cache configuration: 64 lines, 1-cycle hits, 10-cycle misses.
    fn default() -> Self {
        Self {
            num_lines: defaults::CACHE_LINES,
            hit_latency: defaults::HIT_LATENCY,
            miss_latency: defaults::MISS_LATENCY,
        }
    }
}

/// Pipeline timing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Freeze the pipeline for `latency - 1` cycles after every cache access.
    ///
    /// Off by default: memory access completes inside Execute and latency is only accounted.
    #[serde(default)]
    pub model_memory_latency: bool,
}
