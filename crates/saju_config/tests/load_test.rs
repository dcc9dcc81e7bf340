//! Loading configuration from disk.

use std::path::PathBuf;

use saju_config::{AnalysisLevel, ConfigError, SajuConfig};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("saju_config_{}_{name}.toml", std::process::id()))
}

#[test]
fn load_full_file() {
    let path = temp_path("full");
    std::fs::write(
        &path,
        r#"
log_filter = "saju_rs=debug"

[analysis]
level = "basic"
fallback_to_basic = false

[scoring]
identity_salt = 3

[forecast]
offsets = [0, 2, 4]
"#,
    )
    .unwrap();

    let c = SajuConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(c.log_filter, "saju_rs=debug");
    assert_eq!(c.analysis.level, AnalysisLevel::Basic);
    assert!(!c.analysis.fallback_to_basic);
    assert_eq!(c.scoring.identity_salt, 3);
    assert_eq!(c.forecast.offsets, vec![0, 2, 4]);
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("missing");
    let err = SajuConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn blank_log_filter_rejected() {
    let err = SajuConfig::from_toml_str("log_filter = \"  \"").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("log_filter must not be empty")));
}
