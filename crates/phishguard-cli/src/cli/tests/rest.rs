//! Tests for features, schema and checksum.

use super::parse;
use crate::cli::{model_path, CliCommand};
use clap::Parser;
use phishguard_core::config::PhishguardConfig;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_features() {
    match parse(&["phishguard", "features", "http://192.168.1.1/login"]) {
        CliCommand::Features { url, json } => {
            assert_eq!(url, "http://192.168.1.1/login");
            assert!(!json);
        }
        _ => panic!("expected Features"),
    }
}

#[test]
fn cli_parse_features_json() {
    match parse(&["phishguard", "features", "x", "--json"]) {
        CliCommand::Features { json, .. } => assert!(json),
        _ => panic!("expected Features with --json"),
    }
}

#[test]
fn cli_parse_features_requires_url() {
    assert!(crate::cli::Cli::try_parse_from(["phishguard", "features"]).is_err());
}

#[test]
fn cli_parse_schema() {
    match parse(&["phishguard", "schema"]) {
        CliCommand::Schema { model } => assert!(model.is_none()),
        _ => panic!("expected Schema"),
    }
    match parse(&["phishguard", "schema", "--model", "m.json"]) {
        CliCommand::Schema { model } => assert_eq!(model.as_deref(), Some(Path::new("m.json"))),
        _ => panic!("expected Schema with --model"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["phishguard", "checksum", "/path/to/forest.json"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/path/to/forest.json"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn model_override_wins_over_config() {
    let cfg = PhishguardConfig {
        model_path: Some(PathBuf::from("/etc/phishguard/forest.json")),
        ..Default::default()
    };
    assert_eq!(
        model_path(&cfg, Some(Path::new("/tmp/other.json"))).unwrap(),
        PathBuf::from("/tmp/other.json")
    );
    assert_eq!(
        model_path(&cfg, None).unwrap(),
        PathBuf::from("/etc/phishguard/forest.json")
    );
}
