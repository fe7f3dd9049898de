// The full analysis pipeline.
//
// Phases run strictly in order, each completing before the next begins:
//   1. load the taxonomy (fixes the vocabulary the store must cover)
//   2. resolve embeddings for that vocabulary (cache hit or corpus build)
//   3. score every eligible feature (parallel over a read-only store)
//   4. sort, group, and render the report
//
// A fatal error in any phase aborts the run; nothing is partially reported.

use anyhow::Result;
use tracing::info;

use crate::analysis;
use crate::config::Config;
use crate::embeddings::{EmbeddingStore, Resolution};
use crate::report;
use crate::taxonomy;

/// Run the pipeline end to end.
///
/// Returns (features loaded, features scored) for the CLI summary.
/// `refresh_cache` forces a corpus rescan even when the cache exists.
pub fn run(config: &Config, refresh_cache: bool) -> Result<(usize, usize)> {
    // Phase 1: taxonomy. This determines the required vocabulary.
    println!(
        "Loading feature taxonomy from {}...",
        config.feature_table_path.display()
    );
    let (registry, concepts) = taxonomy::load_taxonomy(&config.feature_table_path)?;
    println!(
        "  {} features over {} concepts",
        registry.len(),
        concepts.len()
    );
    report::terminal::display_concept_histogram(&registry.concept_count_histogram());

    // Phase 2: embeddings, restricted to the concept vocabulary.
    let (store, resolution) = EmbeddingStore::resolve(config, &concepts, refresh_cache)?;
    match resolution {
        Resolution::CacheHit => {
            println!("Loaded {} cached embeddings", store.len());
        }
        Resolution::Built => {
            println!(
                "Built embedding cache: {} of {} concepts found in the corpus",
                store.len(),
                concepts.len()
            );
        }
    }

    // Phase 3: score each eligible feature. Order is irrelevant here —
    // results are sorted before display.
    let mut results = analysis::analyze_registry(&registry, &store);
    results.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    info!(
        scored = results.len(),
        features = registry.len(),
        "Cohesion analysis complete"
    );

    // Phase 4: report.
    report::terminal::display_feature_scores(&results);
    let summaries = report::group_by_category(&results, &registry);
    report::terminal::display_label_groups(&summaries);

    Ok((registry.len(), results.len()))
}
