use pretty_assertions::assert_eq;
use roundstats::config::{ConfigError, LoggingConfig};
use roundstats::Config;

#[test]
fn defaults_fill_missing_keys() {
    let config = Config::from_yaml("extension: .txt\nlogging:\n  level: info\n").unwrap();

    assert_eq!(
        Config {
            logs_dir: "logs".into(),
            extension: ".txt".to_owned(),
            logging: LoggingConfig {
                level: "info".to_owned(),
                file: None,
                ansi: true,
            },
        },
        config
    );
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundstats.yaml");
    std::fs::write(
        &path,
        "logs_dir: /srv/hlds/cstrike/logs\nlogging:\n  file: roundstats.log\n  ansi: false\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(std::path::PathBuf::from("/srv/hlds/cstrike/logs"), config.logs_dir);
    assert_eq!(".log", config.extension);
    assert_eq!(Some(std::path::PathBuf::from("roundstats.log")), config.logging.file);
    assert!(!config.logging.ansi);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "logs_dir: [unterminated\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
