//! Configuration module

use serde::{Deserialize, Serialize};

/// Benchmark run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Timed repetitions per benchmarked operation
    pub repeat_count: usize,

    /// Worker threads backing the parallel policies
    pub worker_threads: usize,

    /// Element count used when the CLI does not override it
    pub default_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeat_count: 5,
            worker_threads: num_cpus::get(),
            default_size: 6_000_000,
        }
    }
}

impl BenchConfig {
    /// Load config from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path = std::env::var("PARBENCH_CONFIG")
            .unwrap_or_else(|_| "config/parbench.json".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: BenchConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(BenchConfig::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
