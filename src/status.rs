// System status display — shows configured paths, cache state, and the
// taxonomy's shape without running the analysis.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::taxonomy;

/// Display configuration and cache status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    println!("Embedding set: {}", config.embedding_name);

    let embedding_cache = config.embedding_cache_path();
    let vocab_cache = config.vocab_cache_path();
    if config.cache_present() {
        println!(
            "Embedding cache: {} ({})",
            embedding_cache.display(),
            file_size_display(&embedding_cache)
        );
        println!(
            "Vocab cache: {} ({})",
            vocab_cache.display(),
            file_size_display(&vocab_cache)
        );
    } else {
        println!("Embedding cache: not yet built");
        if config.corpus_path.is_file() {
            println!(
                "  Will be built from {} on the first `knit analyze`",
                config.corpus_path.display()
            );
        } else {
            println!(
                "  Raw corpus missing too: {}",
                config.corpus_path.display()
            );
            println!("  Set KNIT_CORPUS_PATH before running `knit analyze`");
        }
    }

    if config.feature_table_path.is_file() {
        let (registry, concepts) = taxonomy::load_taxonomy(&config.feature_table_path)?;
        println!(
            "Feature table: {} ({} features, {} concepts)",
            config.feature_table_path.display(),
            registry.len(),
            concepts.len()
        );
    } else {
        println!(
            "Feature table: not found at {}",
            config.feature_table_path.display()
        );
        println!("  Set KNIT_FEATURES_PATH to the annotation table");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

fn file_size_display(path: &Path) -> String {
    std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string())
}
