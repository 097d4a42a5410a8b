use taklifnoma_cli::config::{
    RemoteConfig, TaklifConfig, TimeoutConfig, load_config_from, save_config_to,
};
use taklifnoma_storage::gateway::Timeouts;

fn sample(dir: &std::path::Path) -> TaklifConfig {
    TaklifConfig {
        config_version: 1,
        data_dir: dir.join("data"),
        user_id: Some("user-1".to_string()),
        remote: RemoteConfig::S3 {
            bucket: "taklifnoma-records".to_string(),
            region: "eu-central-1".to_string(),
            profile: None,
        },
        timeouts: TimeoutConfig {
            read_secs: 3,
            write_secs: 10,
        },
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = sample(dir.path());

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.user_id.as_deref(), Some("user-1"));
    assert_eq!(loaded.remote, config.remote);
    assert_eq!(loaded.timeouts, config.timeouts);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config_to(&path, &sample(dir.path())).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "data_dir": "/tmp/taklifnoma",
            "remote": { "type": "none" },
            "created_at": "2024-05-01T10:00:00Z"
        }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.remote, RemoteConfig::None);
    assert_eq!(config.timeouts, TimeoutConfig::default());
    assert_eq!(config.timeouts.read_secs, 5);
    assert_eq!(config.timeouts.write_secs, 15);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 99, "data_dir": "/tmp", "remote": { "type": "none" },
             "timeouts": { "read_secs": 1, "write_secs": 1 },
             "created_at": "2024-05-01T10:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn zero_timeouts_become_one_second() {
    let timeouts: Timeouts = TimeoutConfig {
        read_secs: 0,
        write_secs: 0,
    }
    .into();
    assert_eq!(timeouts.read.as_secs(), 1);
    assert_eq!(timeouts.write.as_secs(), 1);
}
