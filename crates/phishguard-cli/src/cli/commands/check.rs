//! `phishguard check` – classify URLs with the loaded model.

use anyhow::{Context, Result};
use phishguard_core::classifier::{Classifier, Predictor, Verdict};
use phishguard_core::config::OutputFormat;
use std::io::{self, BufRead};

pub fn run_check<P: Predictor>(
    clf: &Classifier<P>,
    urls: &[String],
    format: OutputFormat,
) -> Result<()> {
    let urls = if urls.is_empty() {
        read_urls(io::stdin().lock())?
    } else {
        urls.to_vec()
    };

    let mut verdicts = Vec::with_capacity(urls.len());
    for url in &urls {
        if url::Url::parse(url).is_err() {
            tracing::warn!(url = %url, "not an absolute URL; host-based features use defaults");
        }
        verdicts.push(clf.verdict(url)?);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdicts)?),
        OutputFormat::Text => print!("{}", render_verdicts(&verdicts)),
    }
    Ok(())
}

/// One trimmed URL per non-empty line.
pub(crate) fn read_urls<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line.context("read URL from stdin")?;
        let url = line.trim();
        if !url.is_empty() {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

/// A single verdict prints as a sentence; several print as a table.
pub(crate) fn render_verdicts(verdicts: &[Verdict]) -> String {
    match verdicts {
        [] => String::new(),
        [only] => format!("The URL is predicted as: {}\n", only.label),
        many => {
            let mut out = format!("{:<10} {}\n", "LABEL", "URL");
            for v in many {
                out.push_str(&format!("{:<10} {}\n", v.label.to_string(), v.url));
            }
            out
        }
    }
}
