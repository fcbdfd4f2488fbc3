use super::*;
use tempfile::{tempdir, TempDir};
use std::fs::File;
use std::io::Write;

/// Helper function to create a test configuration file
fn create_test_config_file(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    let mut file = File::create(&config_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    config_path
}

fn sample_config() -> Config {
    Config {
        database_url: "original.db".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8080,
    }
}

#[test]
fn test_apply_update_with_all_values() {
    let update = ConfigUpdate {
        database_url: Some("updated.db".to_string()),
        host: Some("0.0.0.0".to_string()),
        port: Some(9000),
        server_url: None,
    };

    let updated = sample_config().apply_update(update);

    assert_eq!(updated.database_url, "updated.db");
    assert_eq!(updated.host, "0.0.0.0");
    assert_eq!(updated.port, 9000);
}

#[test]
fn test_apply_update_with_partial_values() {
    let update = ConfigUpdate {
        port: Some(9000),
        ..ConfigUpdate::default()
    };

    let updated = sample_config().apply_update(update);

    assert_eq!(updated.database_url, "original.db"); // Unchanged
    assert_eq!(updated.host, "127.0.0.1"); // Unchanged
    assert_eq!(updated.port, 9000);
}

#[test]
fn test_apply_update_with_no_values() {
    let updated = sample_config().apply_update(ConfigUpdate::default());
    assert_eq!(updated, sample_config());
}

#[test]
fn test_bind_address() {
    assert_eq!(sample_config().bind_address(), "127.0.0.1:8080");
}

#[test]
fn test_base_config_defaults() {
    let config = base_config(None);

    assert_eq!(config.database_url, "hbnb.db");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
}

#[test]
fn test_base_config_with_path() {
    let dir = tempdir().unwrap();
    let config = base_config(Some(dir.path().to_path_buf()));

    let expected = dir.path().join("hbnb.db").to_string_lossy().to_string();
    assert_eq!(config.database_url, expected);
}

#[test]
fn test_config_from_args_with_all_values() {
    let args = CliArgs {
        database_url: Some("args.db".to_string()),
        host: Some("localhost".to_string()),
        port: Some(5001),
        debug: true,
        log_json: true,
    };

    let update = config_from_args(args);

    assert_eq!(update.database_url, Some("args.db".to_string()));
    assert_eq!(update.host, Some("localhost".to_string()));
    assert_eq!(update.port, Some(5001));
    assert_eq!(update.server_url, None);
}

#[test]
fn test_config_from_args_with_no_values() {
    let update = config_from_args(CliArgs::default());
    assert_eq!(update, ConfigUpdate::default());
}

#[test]
fn test_config_from_file_with_no_path() {
    let update = config_from_file(None).unwrap();
    assert_eq!(update, ConfigUpdate::default());
}

#[test]
fn test_config_from_file_with_valid_toml() {
    let dir = tempdir().unwrap();
    let path = create_test_config_file(&dir, r#"
database_url = "file.db"
host = "10.0.0.1"
port = 7000
server_url = "http://10.0.0.1:7000"
"#);

    let update = config_from_file(Some(path)).unwrap();

    assert_eq!(update.database_url, Some("file.db".to_string()));
    assert_eq!(update.host, Some("10.0.0.1".to_string()));
    assert_eq!(update.port, Some(7000));
    assert_eq!(update.server_url, Some("http://10.0.0.1:7000".to_string()));
}

#[test]
fn test_config_from_file_with_partial_values() {
    let dir = tempdir().unwrap();
    let path = create_test_config_file(&dir, "port = 7000\n");

    let update = config_from_file(Some(path)).unwrap();

    assert_eq!(update.port, Some(7000));
    assert_eq!(update.database_url, None);
    assert_eq!(update.host, None);
}

#[test]
fn test_config_from_file_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = create_test_config_file(&dir, "port = \"not a number\"");

    assert!(config_from_file(Some(path)).is_err());
}

#[test]
fn test_config_from_file_with_nonexistent_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let update = config_from_file(Some(path)).unwrap();
    assert_eq!(update, ConfigUpdate::default());
}

#[test]
fn test_full_config_with_all_sources() {
    let dir = tempdir().unwrap();
    let path = create_test_config_file(&dir, r#"
database_url = "file.db"
host = "10.0.0.1"
port = 7000
"#);

    let args = CliArgs {
        port: Some(5001),
        ..CliArgs::default()
    };

    // Args beat the file, the file beats the defaults
    let config = base_config(None)
        .apply_update(config_from_file(Some(path)).unwrap())
        .apply_update(config_from_args(args));

    assert_eq!(config.database_url, "file.db");
    assert_eq!(config.host, "10.0.0.1");
    assert_eq!(config.port, 5001);
}
