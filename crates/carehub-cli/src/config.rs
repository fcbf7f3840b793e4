use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_RECORDED_BY: &str = "Demo User, RN";
const DEFAULT_TIME_ZONE: &str = "UTC";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarehubConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Staff identifier stamped on recordings when `--by` is not given.
    pub recorded_by: String,
    /// IANA zone the week/month filters are evaluated in. Added in v1.
    pub time_zone: String,
    /// `tracing` filter used when `RUST_LOG` is unset. Added in v1.
    pub log_filter: String,
}

impl Default for CarehubConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            recorded_by: DEFAULT_RECORDED_BY.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.carehub.cli"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> eyre::Result<CarehubConfig> {
    read_config(path).map(|(config, _)| config)
}

/// Like [`load_config`], but also reports the on-disk version when the file
/// had to be migrated. Loading happens before logging is set up, so callers
/// log the migration themselves.
pub fn read_config(path: &Path) -> eyre::Result<(CarehubConfig, Option<u32>)> {
    if !path.exists() {
        return Ok((CarehubConfig::default(), None));
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version {value} is not a valid version"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: CarehubConfig = serde_json::from_value(migrated)?;
    let migrated_from = (on_disk_version < CURRENT_VERSION).then_some(on_disk_version);
    Ok((config, migrated_from))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update carehub."
        ));
    }

    // v0 → v1: add time_zone and log_filter
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("recorded_by")
            .or_insert(serde_json::Value::String(DEFAULT_RECORDED_BY.to_string()));
        obj.entry("time_zone")
            .or_insert(serde_json::Value::String(DEFAULT_TIME_ZONE.to_string()));
        obj.entry("log_filter")
            .or_insert(serde_json::Value::String(DEFAULT_LOG_FILTER.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CarehubConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
