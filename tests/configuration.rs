//! Tests for configuration system

use taskdesk::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.storage.dir, ".taskdesk");
    assert_eq!(config.password.memory_kib, 65536);
    assert_eq!(config.password.iterations, 3);
    assert_eq!(config.password.parallelism, 4);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("taskdesk.toml");
    std::fs::write(
        &path,
        "[storage]\ndir = \"/var/lib/taskdesk\"\n\n[password]\niterations = 1\n",
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.storage.dir, "/var/lib/taskdesk");
    assert_eq!(config.password.iterations, 1);
    // Keys absent from the file keep their defaults
    assert_eq!(config.password.memory_kib, 65536);
    assert_eq!(config.observability.log_level, "info");

    Ok(())
}

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_owned()))?;

    assert_eq!(config.storage.dir, ".taskdesk");
    assert_eq!(config.password.parallelism, 4);

    Ok(())
}
