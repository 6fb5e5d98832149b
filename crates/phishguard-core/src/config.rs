use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::MODEL_FILENAME;

const APP_PREFIX: &str = "phishguard";

/// How results are printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Model artifact; if missing, `~/.local/share/phishguard/phishing_forest.json`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Expected SHA-256 (hex) of the model artifact. Loading fails on mismatch.
    #[serde(default)]
    pub model_sha256: Option<String>,
    /// Default output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl PhishguardConfig {
    /// Configured model path, falling back to the XDG data location.
    pub fn resolve_model_path(&self) -> Result<PathBuf> {
        match &self.model_path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `$XDG_DATA_HOME/phishguard/phishing_forest.json`.
pub fn default_model_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs
        .get_data_home()
        .join(APP_PREFIX)
        .join(MODEL_FILENAME))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PhishguardConfig> {
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PhishguardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PhishguardConfig::default();
        assert!(cfg.model_path.is_none());
        assert!(cfg.model_sha256.is_none());
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PhishguardConfig {
            model_path: Some(PathBuf::from("/opt/models/forest.json")),
            model_sha256: Some("ab".repeat(32)),
            output: OutputFormat::Json,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PhishguardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: PhishguardConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PhishguardConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            model_path = "/srv/phishguard/model.json"
            output = "json"
        "#;
        let cfg: PhishguardConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.model_path.as_deref(),
            Some(Path::new("/srv/phishguard/model.json"))
        );
        assert_eq!(cfg.output, OutputFormat::Json);
        assert!(cfg.model_sha256.is_none());
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<PhishguardConfig>(r#"output = "xml""#).is_err());
    }

    #[test]
    fn resolve_prefers_configured_path() {
        let cfg = PhishguardConfig {
            model_path: Some(PathBuf::from("/tmp/m.json")),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_model_path().unwrap(), PathBuf::from("/tmp/m.json"));
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, PhishguardConfig::default());

        fs::write(&path, "output = \"json\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn load_or_init_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model_path = [").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
