use blogfolio_common::config::{load_config_from, BlogfolioConfig};

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
data_dir = "/var/lib/blogfolio"

[profile]
user = "guest"
host = "portfolio"
cwd = "/home/guest/site"

[counter]
animation_ms = 250

[log]
level = "debug"
file = "/tmp/blogfolio.log"
"#;
    let config: BlogfolioConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.data_dir, "/var/lib/blogfolio");
    assert_eq!(config.profile.user, "guest");
    assert_eq!(config.profile.host, "portfolio");
    assert_eq!(config.profile.cwd, "/home/guest/site");
    assert_eq!(config.counter.animation_ms, 250);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn test_config_defaults() {
    let toml_str = r#"
[profile]
user = "guest"
"#;
    let config: BlogfolioConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.profile.user, "guest");
    assert_eq!(config.profile.host, "blogfolio");
    assert_eq!(config.profile.cwd, "/home/asnan/blogfolio");
    assert_eq!(config.counter.animation_ms, 1000);
    assert_eq!(config.log.level, "info");
    assert!(config.data_dir.ends_with("storage"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("client.toml")).unwrap();
    assert_eq!(config.profile.user, "asnan");
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("client.toml");
    std::fs::write(&path, "data_dir = [").unwrap();
    assert!(load_config_from(&path).is_err());
}
