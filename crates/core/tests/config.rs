//! Loading generator configuration from disk.

use offsetgen_core::{Error, GeneratorConfig, HeaderGuard, OffsetRadix};
use std::path::PathBuf;

fn config_path(name: &str, content: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("offsetgen-core");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_overrides_defaults() {
    let path = config_path(
        "overrides.json",
        r#"{"module_name": "UnityPlayer.dll", "offset_radix": "decimal", "header_guard": "include_guard"}"#,
    );
    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.module_name, "UnityPlayer.dll");
    assert_eq!(config.offset_radix, OffsetRadix::Decimal);
    assert_eq!(config.header_guard, HeaderGuard::IncludeGuard);
    assert_eq!(config.namespace, "il2cppdumper");
}

#[test]
fn test_load_rejects_invalid_values() {
    let path = config_path("invalid.json", r#"{"offsets_namespace": "1st"}"#);
    assert!(matches!(GeneratorConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_load_reports_json_errors() {
    let path = config_path("broken.json", "{\"namespace\": ");
    assert!(matches!(GeneratorConfig::load(&path), Err(Error::Json(_))));
}

#[test]
fn test_load_missing_file() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("offsetgen-core").join("absent.json");
    assert!(matches!(GeneratorConfig::load(&path), Err(Error::Io(_))));
}
