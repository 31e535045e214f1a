use std::path::{Path, PathBuf};

use clap::ValueEnum;
use medcalc_core::models::WeightUnit;
use serde::{Deserialize, Serialize};

/// Layout version written in `config_version`. Version 0 is the unversioned
/// layout handled by [`rename_legacy_keys`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "MEDCALC_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedcalcConfig {
    /// Layout version; absent in unversioned files.
    #[serde(default)]
    pub config_version: u32,
    /// Unit assumed for neonatal weights when none is given.
    #[serde(default)]
    pub default_unit: WeightUnit,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for MedcalcConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_unit: WeightUnit::default(),
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("medcalc").join("config.json"))
}

/// Resolve where to read config from: the explicit path, then
/// [`CONFIG_ENV`], then the platform config directory.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load config, falling back to defaults when no file exists at the
/// default location. An explicitly named file must exist.
pub fn load_config(explicit: Option<&Path>) -> eyre::Result<MedcalcConfig> {
    let Some(path) = config_path(explicit) else {
        return Ok(MedcalcConfig::default());
    };

    if !path.exists() {
        if explicit.is_some() {
            return Err(eyre::eyre!("config file not found: {}", path.display()));
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MedcalcConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parse config text. Older layouts are upgraded in memory before the
/// typed deserialize, so renamed keys still land in the right fields.
pub fn parse_config(contents: &str) -> eyre::Result<MedcalcConfig> {
    let mut json: serde_json::Value = serde_json::from_str(contents)?;
    let version = stored_version(&json)?;
    if version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {version} is newer than this build supports ({CURRENT_VERSION}); \
             upgrade medcalc to read it"
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
    if version < 1 {
        rename_legacy_keys(obj);
    }
    obj.insert("config_version".to_string(), CURRENT_VERSION.into());

    Ok(serde_json::from_value(json)?)
}

/// Absent means the unversioned layout.
fn stored_version(json: &serde_json::Value) -> eyre::Result<u32> {
    match json.get("config_version") {
        None => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version must be a small whole number, got {value}")),
    }
}

/// Unversioned configs called the neonatal unit `unit` and the output
/// format `format`. A new-style key wins when both are present.
fn rename_legacy_keys(obj: &mut serde_json::Map<String, serde_json::Value>) {
    for (old, new) in [("unit", "default_unit"), ("format", "output")] {
        if let Some(value) = obj.remove(old) {
            obj.entry(new).or_insert(value);
        }
    }
    tracing::info!("upgraded unversioned config keys");
}
