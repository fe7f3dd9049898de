// Raw pretrained-corpus scan.
//
// One token per line, `token v_1 v_2 … v_d` whitespace-separated, d fixed
// across the file. Only tokens in the required vocabulary are kept; the
// rest of the (large) corpus streams past. This is the slow path — it runs
// once, after which the cache covers subsequent runs.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::PipelineError;

/// Scan the corpus, keeping (token, vector) pairs for required tokens in
/// corpus order. Required tokens absent from the corpus are simply not in
/// the result; corpus tokens never required are skipped.
pub fn scan_corpus(
    path: &Path,
    required: &HashSet<String>,
) -> Result<(Vec<String>, Vec<Vec<f64>>)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open embedding corpus: {}", path.display()))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  Scanning corpus {spinner} {pos} lines, {msg} kept")
            .unwrap(),
    );
    spinner.set_message("0");

    let mut tokens: Vec<String> = Vec::with_capacity(required.len());
    let mut vectors: Vec<Vec<f64>> = Vec::with_capacity(required.len());
    let mut dimension: Option<usize> = None;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        spinner.inc(1);

        let mut fields = line.split_whitespace();
        let Some(token) = fields.next() else {
            continue;
        };
        if !required.contains(token) {
            continue;
        }

        let vector = fields
            .map(|v| {
                v.parse::<f64>().map_err(|_| {
                    PipelineError::Integrity(format!(
                        "corpus line {}: non-numeric vector component {v:?} for token {token:?}",
                        idx + 1
                    ))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match dimension {
            None => dimension = Some(vector.len()),
            Some(d) if d != vector.len() => {
                return Err(PipelineError::Integrity(format!(
                    "corpus line {}: token {token:?} has {} dimensions, expected {d}",
                    idx + 1,
                    vector.len()
                ))
                .into());
            }
            Some(_) => {}
        }

        tokens.push(token.to_string());
        vectors.push(vector);
        spinner.set_message(tokens.len().to_string());
    }

    spinner.finish_and_clear();
    info!(
        kept = tokens.len(),
        required = required.len(),
        dimension = dimension.unwrap_or(0),
        "Scanned embedding corpus"
    );

    Ok((tokens, vectors))
}
