//! Tests for model loading and per-command config use.

use crate::cli::{load_classifier, CliCommand};
use anyhow::anyhow;
use phishguard_core::checksum;
use phishguard_core::config::PhishguardConfig;
use phishguard_core::model::{ForestModel, ModelError, Node, Tree};
use phishguard_core::Label;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// One stump: an `@` in the URL means phishing.
fn at_symbol_forest() -> ForestModel {
    ForestModel {
        feature_names: vec!["URL_Length".into(), "having_At_Symbol".into()],
        classes: vec![-1, 1],
        trees: vec![Tree {
            nodes: vec![
                Node::Split {
                    feature: 1,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                Node::Leaf {
                    value: vec![0.0, 7.0],
                },
                Node::Leaf {
                    value: vec![7.0, 0.0],
                },
            ],
        }],
    }
}

fn write_model(dir: &Path, model: &ForestModel) -> PathBuf {
    let path = dir.join("phishing_forest.json");
    std::fs::write(&path, serde_json::to_vec_pretty(model).unwrap()).unwrap();
    path
}

fn pinned_config(path: &Path, digest: &str) -> PhishguardConfig {
    PhishguardConfig {
        model_path: Some(path.to_path_buf()),
        model_sha256: Some(digest.to_string()),
        ..Default::default()
    }
}

fn no_config() -> anyhow::Result<PhishguardConfig> {
    Err(anyhow!("config dir is read-only"))
}

#[test]
fn load_classifier_enforces_pin_on_configured_path() {
    let dir = tempdir().unwrap();
    let path = write_model(dir.path(), &at_symbol_forest());
    let cfg = pinned_config(&path, &"0".repeat(64));

    let err = load_classifier(&cfg, None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ModelError>(),
        Some(ModelError::ChecksumMismatch { .. })
    ));
}

#[test]
fn load_classifier_override_skips_pin() {
    let dir = tempdir().unwrap();
    let path = write_model(dir.path(), &at_symbol_forest());
    let cfg = pinned_config(&path, &"0".repeat(64));

    let clf = load_classifier(&cfg, Some(&path)).unwrap();
    assert_eq!(clf.verdict("http://a@b.com").unwrap().label, Label::Phishing);
    assert_eq!(clf.verdict("http://b.com").unwrap().label, Label::Safe);
}

#[test]
fn load_classifier_accepts_matching_pin() {
    let dir = tempdir().unwrap();
    let path = write_model(dir.path(), &at_symbol_forest());
    let digest = checksum::sha256_path(&path).unwrap();

    assert!(load_classifier(&pinned_config(&path, &digest), None).is_ok());
}

#[test]
fn load_classifier_rejects_foreign_schema() {
    let dir = tempdir().unwrap();
    let mut forest = at_symbol_forest();
    forest.feature_names.push("whois_age".into());
    let path = write_model(dir.path(), &forest);

    let err = load_classifier(&PhishguardConfig::default(), Some(&path)).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("does not match this extractor"), "{msg}");
    assert!(msg.contains("whois_age"), "{msg}");
}

#[test]
fn checksum_runs_without_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("any.bin");
    std::fs::write(&path, b"x").unwrap();
    let cmd = CliCommand::Checksum {
        path: path.display().to_string(),
    };
    assert!(cmd.dispatch(no_config).is_ok());
}

#[test]
fn features_falls_back_to_default_config() {
    let cmd = CliCommand::Features {
        url: "http://example.com".into(),
        json: false,
    };
    assert!(cmd.dispatch(no_config).is_ok());
}

#[test]
fn features_json_never_reads_config() {
    let cmd = CliCommand::Features {
        url: "http://example.com".into(),
        json: true,
    };
    assert!(cmd
        .dispatch(|| -> anyhow::Result<PhishguardConfig> { panic!("config was read") })
        .is_ok());
}

#[test]
fn check_and_schema_require_config() {
    let check = CliCommand::Check {
        urls: vec!["http://example.com".into()],
        model: None,
        json: false,
    };
    let err = check.dispatch(no_config).unwrap_err();
    assert!(format!("{err:#}").contains("read-only"));

    let schema = CliCommand::Schema { model: None };
    assert!(schema.dispatch(no_config).is_err());
}
