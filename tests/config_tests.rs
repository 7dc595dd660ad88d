use std::io::Write;
use tempfile::NamedTempFile;

use teamrank::util::config::{AppConfig, DEFAULT_FROM, DEFAULT_PAGE_SIZE, DEFAULT_TO};

fn write_config(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
fn test_load_full_config() {
    let f = write_config(
        r#"
[api]
base_url = "http://localhost:8080"
timeout_secs = 15

[dashboard]
default_from = "01/08/2025"
default_to = "31/08/2025"
page_size = 25
discard_stale_responses = true

[ui]
message_width = 72
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.api.timeout_secs, Some(15));
    assert_eq!(config.dashboard.default_from, "01/08/2025");
    assert_eq!(config.dashboard.default_to, "31/08/2025");
    assert_eq!(config.dashboard.page_size, 25);
    assert!(config.dashboard.discard_stale_responses);
    assert_eq!(config.ui.message_width, 72);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let f = write_config(
        r#"
[dashboard]
page_size = 5
"#,
    );

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.dashboard.page_size, 5);
    assert_eq!(config.dashboard.default_from, DEFAULT_FROM);
    assert_eq!(config.dashboard.default_to, DEFAULT_TO);
    assert!(!config.dashboard.discard_stale_responses);
    assert_eq!(
        config.api.base_url,
        "https://performance-github.onrender.com"
    );
    assert!(config.api.timeout_secs.is_none());
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let f = write_config("");
    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.dashboard.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.ui.message_width, 50);
}

#[test]
fn test_default_range_comes_from_dashboard_section() {
    let config = AppConfig::default();
    let range = config.default_range();
    assert_eq!(range.from, "28/07/2025");
    assert_eq!(range.to, "25/08/2025");
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let f = write_config("this is not [valid toml {{");
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_zero_page_size_rejected() {
    let f = write_config("[dashboard]\npage_size = 0\n");
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_malformed_default_date_rejected() {
    let f = write_config("[dashboard]\ndefault_from = \"2025-07-28\"\n");
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_non_http_base_url_rejected() {
    let f = write_config("[api]\nbase_url = \"ftp://stats.example.com\"\n");
    assert!(AppConfig::load(Some(f.path())).is_err());
}

#[test]
fn test_default_config_is_valid() {
    assert!(AppConfig::default().validate().is_ok());
}
