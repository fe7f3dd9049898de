// On-disk cache artifacts: a bincode-serialized vector array and a
// plain-text token list, one token per line, in the same order.
//
// The two files are written and read together; the store checks their
// lengths agree before trusting them.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Write the vector array to `path` (bincode).
pub fn save_vectors(path: &Path, vectors: &[Vec<f64>]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create embedding cache: {}", path.display()))?;
    bincode::serialize_into(BufWriter::new(file), vectors)
        .with_context(|| format!("Failed to serialize embedding cache: {}", path.display()))?;
    Ok(())
}

/// Read the vector array back from `path`.
pub fn load_vectors(path: &Path) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open embedding cache: {}", path.display()))?;
    bincode::deserialize_from(BufReader::new(file))
        .with_context(|| format!("Failed to deserialize embedding cache: {}", path.display()))
}

/// Write the token list to `path`, one token per line.
pub fn save_vocab(path: &Path, tokens: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create vocab cache: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for token in tokens {
        writeln!(writer, "{token}")
            .with_context(|| format!("Failed to write vocab cache: {}", path.display()))?;
    }
    Ok(())
}

/// Read the token list back from `path`.
pub fn load_vocab(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open vocab cache: {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .map(|line| {
            line.map(|l| l.trim().to_string())
                .with_context(|| format!("Failed to read vocab cache: {}", path.display()))
        })
        .collect()
}
