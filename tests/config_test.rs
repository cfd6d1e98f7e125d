use naild_studio::domain::ports::ConfigProvider;
use naild_studio::utils::error::ErrorSeverity;
use naild_studio::utils::validation::Validate;
use naild_studio::{ApiClient, ReadFailurePolicy, StudioSettings};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn loads_settings_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "http://studio.local:8000/api/"
timeout_seconds = 3

[content]
on_read_failure = "error"
"#
    )
    .unwrap();

    let settings = StudioSettings::from_file(file.path()).unwrap();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.timeout(), Duration::from_secs(3));
    assert_eq!(settings.read_failure_policy(), ReadFailurePolicy::Error);

    let client = ApiClient::new(&settings).unwrap();
    assert_eq!(client.base_url(), "http://studio.local:8000/api");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StudioSettings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::High);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api\nbase_url = ").unwrap();

    let err = StudioSettings::from_file(file.path()).unwrap_err();

    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert!(err.to_string().contains("TOML parsing error"));
}

#[test]
fn zero_timeout_is_rejected() {
    let settings = StudioSettings::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
    assert!(settings.validate().is_err());
}
