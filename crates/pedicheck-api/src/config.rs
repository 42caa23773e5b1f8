use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pedicheck_classifier::TrainingConfig;
use pedicheck_export::ReportStyles;
use pedicheck_facilities::FacilitiesConfig;
use pedicheck_safety::SafetyConfig;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const CONFIG_ENV: &str = "PEDICHECK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub bind_address: String,
    /// JSON records used to train the condition model at startup.
    pub dataset_path: Option<PathBuf>,
    /// Replaces the built-in symptom catalog.
    pub catalog_path: Option<PathBuf>,
    pub training: TrainingConfig,
    pub safety: SafetyConfig,
    pub facilities: FacilitiesConfig,
    pub report_styles: ReportStyles,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_address: "127.0.0.1:8080".to_string(),
            dataset_path: None,
            catalog_path: None,
            training: TrainingConfig::default(),
            safety: SafetyConfig::default(),
            facilities: FacilitiesConfig::default(),
            report_styles: ReportStyles::default(),
        }
    }
}

/// `$PEDICHECK_CONFIG`, else `<config dir>/pedicheck/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("pedicheck").join("config.json"))
}

pub fn load_config() -> eyre::Result<ServiceConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(ServiceConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<ServiceConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(raw_version).map_err(|_| {
        eyre::eyre!("config_version {raw_version} is newer than this build supports ({CURRENT_VERSION})")
    })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: ServiceConfig = serde_json::from_value(migrated)?;
    tracing::info!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 -> v1: flat `var_smoothing` and `infant_age_months` move into
    // their sections.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        for (key, section) in [("var_smoothing", "training"), ("infant_age_months", "safety")] {
            let Some(value) = obj.remove(key) else {
                continue;
            };
            let target = obj
                .entry(section)
                .or_insert_with(|| serde_json::Value::Object(Default::default()));
            let target = target
                .as_object_mut()
                .ok_or_else(|| eyre::eyre!("config section '{section}' is not an object"))?;
            target.entry(key).or_insert(value);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1 (nested training and safety settings)");
    }

    Ok(json)
}
