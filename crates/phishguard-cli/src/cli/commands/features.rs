//! `phishguard features` – show the extracted feature vector.

use anyhow::Result;
use phishguard_core::config::OutputFormat;
use phishguard_core::features::{self, FeatureVector};

pub fn run_features(url: &str, format: OutputFormat) -> Result<()> {
    let vector = features::extract(url);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vector)?),
        OutputFormat::Text => print!("{}", render_table(&vector)),
    }
    Ok(())
}

pub(crate) fn render_table(vector: &FeatureVector) -> String {
    let mut out = format!("{:<28} {:>6} {}\n", "FEATURE", "VALUE", "SOURCE");
    for (key, value) in vector.iter() {
        let source = if value.is_placeholder() {
            "placeholder"
        } else {
            "url"
        };
        out.push_str(&format!("{:<28} {:>6} {}\n", key.name(), value.get(), source));
    }
    out
}
