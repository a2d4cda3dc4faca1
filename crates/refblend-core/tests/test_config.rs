use refblend_core::config::AppConfig;
use refblend_core::consts::{DEFAULT_BATCH_SIZE, DEFAULT_MODEL, MAX_SCALE, MIN_SCALE};
use refblend_core::request::{AspectRatio, Resolution};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.generation.model, DEFAULT_MODEL);
    assert_eq!(config.generation.batch_size, DEFAULT_BATCH_SIZE);
    assert_eq!(config.generation.resolution, Resolution::TwoK);
    assert_eq!(config.viewer.scale_limits().min, MIN_SCALE);
    assert_eq!(config.viewer.scale_limits().max, MAX_SCALE);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip() {
    let mut config = AppConfig::default();
    config.generation.batch_size = 2;
    config.generation.aspect_ratio = AspectRatio::Portrait;
    config.viewer.max_scale = 4.0;

    let text = config.to_toml().unwrap();
    assert!(text.contains("aspect_ratio = \"9:16\""), "got:\n{text}");
    assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = AppConfig::from_toml(
        r#"
[generation]
resolution = "4k"
"#,
    )
    .unwrap();
    assert_eq!(config.generation.resolution, Resolution::FourK);
    assert_eq!(config.generation.batch_size, DEFAULT_BATCH_SIZE);
    assert_eq!(config.viewer, Default::default());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
}

#[test]
fn test_invalid_toml_is_error() {
    assert!(AppConfig::from_toml("[generation]\nbatch_size = \"many\"").is_err());
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("refblend.toml");
    let mut config = AppConfig::default();
    config.generation.model = "custom-model".into();
    config.save(&path).unwrap();
    assert_eq!(AppConfig::load(&path).unwrap(), config);
}
