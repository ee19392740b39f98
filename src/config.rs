use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use taskdesk_user::WorkFactor;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the `users_db` / `tasks_db` snapshots
    pub dir: String,
}

/// Argon2id work factor used when hashing new passwords
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl PasswordConfig {
    pub fn work_factor(&self) -> WorkFactor {
        WorkFactor {
            memory_kib: self.memory_kib,
            iterations: self.iterations,
            parallelism: self.parallelism,
        }
    }
}

fn default_memory_kib() -> u32 {
    WorkFactor::default().memory_kib
}

fn default_iterations() -> u32 {
    WorkFactor::default().iterations
}

fn default_parallelism() -> u32 {
    WorkFactor::default().parallelism
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TASKDESK__STORAGE__DIR, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.dir", ".taskdesk")?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TASKDESK")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.dir.trim().is_empty() {
            return Err("Storage dir must not be empty".to_string());
        }
        if self.password.iterations < 1 {
            return Err("Password iterations must be at least 1".to_string());
        }
        if self.password.parallelism < 1 {
            return Err("Password parallelism must be at least 1".to_string());
        }
        if self.password.memory_kib < 8 * self.password.parallelism {
            return Err("Password memory must be at least 8 KiB per lane".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            storage: StorageConfig {
                dir: ".taskdesk".to_string(),
            },
            password: PasswordConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_default_is_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_storage_dir() {
        let mut config = config();
        config.storage.dir = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_iterations() {
        let mut config = config();
        config.password.iterations = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_memory_below_lane_minimum() {
        let mut config = config();
        config.password.parallelism = 4;
        config.password.memory_kib = 16;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_work_factor_follows_config() {
        let mut config = config();
        config.password.memory_kib = 1024;

        assert_eq!(
            config.password.work_factor(),
            WorkFactor {
                memory_kib: 1024,
                iterations: 3,
                parallelism: 4,
            }
        );
    }
}
