use roster_functions::utils::validation::Validate;
use roster_functions::{ApiError, StoreConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_store_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
region = "ap-southeast-2"
endpoint_url = "http://localhost:8000"
employees_table = "roster-local-Employees"
books_table = "roster-local-Books"
"#
    )
    .unwrap();

    let config = StoreConfig::from_file(file.path()).unwrap();
    assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    assert_eq!(config.employees_table, "roster-local-Employees");
    assert_eq!(config.books_table, "roster-local-Books");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file() {
    let err = StoreConfig::from_file("/nonexistent/roster.toml").unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "region = [1, 2").unwrap();

    let err = StoreConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ApiError::ConfigFile(_)));
}
