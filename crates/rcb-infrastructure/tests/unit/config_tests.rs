//! Configuration Loader Tests

use rcb_domain::Error;
use rcb_infrastructure::config::{ConfigBuilder, ConfigLoader, ResolutionConfig};
use rcb_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = ConfigBuilder::new().build();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.resolution.strict_port_types);
    assert!(config.resolution.allow_dynamic_ports);
    assert!(config.resolution.max_selection_depth > 0);
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_log_level("debug")
        .with_max_selection_depth(4)
        .build();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.resolution.max_selection_depth, 4);
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("rcb.toml");

    let original = ConfigBuilder::new()
        .with_resolution(ResolutionConfig {
            strict_port_types: false,
            allow_dynamic_ports: false,
            max_selection_depth: 8,
        })
        .build();
    ConfigLoader::new()
        .save_to_file(&original, &config_path)
        .expect("save");

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("load");

    assert_eq!(loaded.resolution, original.resolution);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("rcb.toml");
    std::fs::write(&config_path, "[resolution]\nstrict_port_types = false\n").expect("write");

    let loaded = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .expect("load");

    assert!(!loaded.resolution.strict_port_types);
    assert!(loaded.resolution.allow_dynamic_ports);
    assert_eq!(loaded.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("temp dir");
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    let loaded = loader.load().expect("load");

    assert_eq!(loaded.resolution, ResolutionConfig::default());
    assert!(loader.config_path().is_some());
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("rcb.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"loud\"\n").expect("write");

    match ConfigLoader::new().with_config_path(&config_path).load() {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("loud")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_zero_selection_depth_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("rcb.toml");
    std::fs::write(&config_path, "[resolution]\nmax_selection_depth = 0\n").expect("write");

    assert!(matches!(
        ConfigLoader::new().with_config_path(&config_path).load(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_malformed_file_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("rcb.toml");
    std::fs::write(&config_path, "[resolution]\nmax_selection_depth = \"many\"\n").expect("write");

    assert!(matches!(
        ConfigLoader::new().with_config_path(&config_path).load(),
        Err(Error::Configuration { .. })
    ));
}
