//! CLI for the phishguard URL classifier.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phishguard_core::config::{self, OutputFormat, PhishguardConfig};
use phishguard_core::{Classifier, ForestModel};
use std::path::{Path, PathBuf};

use commands::{run_check, run_checksum, run_features, run_schema};

/// Top-level CLI for the phishguard URL classifier.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "Classify URLs as safe or phishing from lexical features", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify URLs. Reads one URL per line from stdin when none are given.
    Check {
        /// URLs to classify.
        urls: Vec<String>,

        /// Model artifact (overrides `model_path` in config; skips `model_sha256`).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,

        /// Print verdicts as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the feature vector extracted from a URL.
    Features {
        /// URL to analyze.
        url: String,

        /// Print as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Print the feature schema declared by the model artifact.
    Schema {
        /// Model artifact (overrides `model_path` in config).
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file (e.g. a model artifact to pin in config).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.dispatch(config::load_or_init)
    }

    /// Runs the command. Config is read only by commands that use it, so
    /// `features --json` and `checksum` work without a writable config dir.
    pub fn dispatch<F>(self, load_config: F) -> Result<()>
    where
        F: FnOnce() -> Result<PhishguardConfig>,
    {
        match self {
            CliCommand::Check { urls, model, json } => {
                let cfg = required_config(load_config)?;
                let clf = load_classifier(&cfg, model.as_deref())?;
                run_check(&clf, &urls, output_format(&cfg, json))?;
            }
            CliCommand::Features { url, json } => {
                let format = if json {
                    OutputFormat::Json
                } else {
                    optional_config(load_config).output
                };
                run_features(&url, format)?;
            }
            CliCommand::Schema { model } => {
                let cfg = required_config(load_config)?;
                let path = model_path(&cfg, model.as_deref())?;
                let model = ForestModel::load(&path)?;
                run_schema(&model)?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}

fn required_config<F>(load_config: F) -> Result<PhishguardConfig>
where
    F: FnOnce() -> Result<PhishguardConfig>,
{
    let cfg = load_config().context("load config")?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Config for commands that only read display preferences from it.
fn optional_config<F>(load_config: F) -> PhishguardConfig
where
    F: FnOnce() -> Result<PhishguardConfig>,
{
    match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("config unavailable ({e:#}), using defaults");
            PhishguardConfig::default()
        }
    }
}

fn output_format(cfg: &PhishguardConfig, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

fn model_path(cfg: &PhishguardConfig, model_override: Option<&Path>) -> Result<PathBuf> {
    match model_override {
        Some(p) => Ok(p.to_path_buf()),
        None => cfg.resolve_model_path(),
    }
}

/// Loads the model once and checks its schema against the extractor.
/// Any failure here is fatal: the CLI never classifies without a usable model.
fn load_classifier(
    cfg: &PhishguardConfig,
    model_override: Option<&Path>,
) -> Result<Classifier<ForestModel>> {
    let path = model_path(cfg, model_override)?;
    let pinned = cfg.model_sha256.as_deref().filter(|_| model_override.is_none());
    let model = match pinned {
        Some(expected) => ForestModel::load_verified(&path, expected)?,
        None => ForestModel::load(&path)?,
    };
    let clf = Classifier::new(model);
    clf.check_schema()
        .with_context(|| format!("model {} does not match this extractor", path.display()))?;
    Ok(clf)
}

#[cfg(test)]
mod tests;
