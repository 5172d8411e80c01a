//! Reveal config file loading

use std::io::Write;

use folio_core::{Easing, FolioError, RevealConfig, RevealMode};
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"{
            "threshold": 0.3,
            "offset_px": 24,
            "duration_ms": 450,
            "easing": "ease-in-out",
            "mode": "once"
        }"#,
    );

    let config = RevealConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        RevealConfig {
            threshold: 0.3,
            offset_px: 24.0,
            duration_ms: 450,
            easing: Easing::EaseInOut,
            mode: RevealMode::Once,
        }
    );
}

#[test]
fn test_load_empty_object_gives_defaults() {
    let file = write_config("{}");
    let config = RevealConfig::load(file.path()).unwrap();
    assert_eq!(config, RevealConfig::default());
}

#[test]
fn test_load_rejects_out_of_range_threshold() {
    let file = write_config(r#"{ "threshold": 2.0 }"#);
    let err = RevealConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::InvalidThreshold(t) if t == 2.0));
}

#[test]
fn test_load_rejects_malformed_json() {
    let file = write_config("{ threshold: ");
    let err = RevealConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, FolioError::Json(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RevealConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}
