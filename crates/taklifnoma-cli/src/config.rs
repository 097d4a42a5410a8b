use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use taklifnoma_storage::gateway::{DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT, Timeouts};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "uz.taklifnoma.cli";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaklifConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Root of the local fallback store.
    pub data_dir: PathBuf,
    /// Owner stamped on saved records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub remote: RemoteConfig,
    /// Added in v1; older configs get the defaults.
    pub timeouts: TimeoutConfig,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RemoteConfig {
    /// Local store only.
    None,
    S3 {
        bucket: String,
        region: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        profile: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub read_secs: u64,
    pub write_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            read_secs: DEFAULT_READ_TIMEOUT.as_secs(),
            write_secs: DEFAULT_WRITE_TIMEOUT.as_secs(),
        }
    }
}

impl From<TimeoutConfig> for Timeouts {
    fn from(t: TimeoutConfig) -> Self {
        Timeouts {
            read: Duration::from_secs(t.read_secs.max(1)),
            write: Duration::from_secs(t.write_secs.max(1)),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join(APP_DIR))
}

pub fn default_config() -> eyre::Result<TaklifConfig> {
    Ok(TaklifConfig {
        config_version: CURRENT_VERSION,
        data_dir: default_data_dir()?,
        user_id: None,
        remote: RemoteConfig::None,
        timeouts: TimeoutConfig::default(),
        created_at: jiff::Timestamp::now(),
    })
}

/// Load the config from its default location, or defaults if none exists.
pub fn load_or_default() -> eyre::Result<TaklifConfig> {
    let path = config_path()?;
    if path.exists() {
        load_config_from(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        default_config()
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<TaklifConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: TaklifConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update taklifnoma."
        ));
    }

    // v0 → v1: add timeouts
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("timeouts")
            .or_insert(serde_json::to_value(TimeoutConfig::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added timeouts)");
    }

    Ok(json)
}

pub fn save_config(config: &TaklifConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &TaklifConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The config may carry an AWS profile name and user id
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
