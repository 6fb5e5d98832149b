//! `phishguard schema` – list the model's expected features.

use anyhow::{bail, Result};
use phishguard_core::classifier::{self, Predictor};

/// Prints the model schema in order. Fails when any column is one the
/// extractor does not produce, so a mismatched artifact is caught before use.
pub fn run_schema<P: Predictor>(model: &P) -> Result<()> {
    let names = model.feature_names();
    let unknown = classifier::unknown_features(names);
    for name in names {
        if unknown.contains(name) {
            println!("{name}  (not produced by extractor)");
        } else {
            println!("{name}");
        }
    }
    if !unknown.is_empty() {
        bail!(
            "{} of {} model feature(s) are not produced by the extractor: {}",
            unknown.len(),
            names.len(),
            unknown.join(", ")
        );
    }
    Ok(())
}
