// tests/config_test.rs
use releng_tools::config::{load_config, Config};
use releng_tools::RelengError;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[rewrite]
product_prefix = "org.eclipse.linuxtools"

[extract]
report_root = "stable"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.rewrite.product_prefix, "org.eclipse.linuxtools");
    assert_eq!(config.rewrite.snapshot_suffix, "-SNAPSHOT");
    assert_eq!(config.extract.report_root, "stable");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RelengError::Io(_)));
}

#[test]
fn test_malformed_file_names_path_once_prefixed() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"rewrite = \"not a table\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(temp_file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Configuration error: "));
    assert_eq!(msg.matches("Configuration error").count(), 1);
    assert!(msg.contains(&temp_file.path().display().to_string()));
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.rewrite.product_prefix, "org.eclipse.tracecompass");
    assert_eq!(config.extract.report_root, "releases");
}
