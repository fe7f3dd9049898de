// Annotation-table parsing.
//
// The source table is tab-separated, one row per concept-feature
// association. Rows are folded into a RegistryBuilder — a growable map from
// feature name to record — and frozen into the immutable FeatureRegistry
// once the scan completes. Builders can be merged, so row shards may be
// folded independently and unioned afterwards.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::PipelineError;

use super::registry::{Feature, FeatureRegistry};

// Column layout of the annotation table (0-indexed):
// 0=concept, 1=feature, 2=word class, 3=majority, 4=minority, 5=category,
// 10=distinguishing attribute. Extra columns are tolerated.
const COL_CONCEPT: usize = 0;
const COL_FEATURE: usize = 1;
const COL_WORD_CLASS: usize = 2;
const COL_MAJORITY: usize = 3;
const COL_MINORITY: usize = 4;
const COL_CATEGORY: usize = 5;
const COL_DISTINGUISHING: usize = 10;

/// A row must reach the distinguishing-attribute column.
const MIN_COLUMNS: usize = COL_DISTINGUISHING + 1;

/// Accumulates concept-feature rows into feature records.
///
/// Label fields are taken from whichever row introduces a feature; later
/// rows for the same feature only extend its concept set (first-row-wins —
/// the source data is assumed label-consistent per feature).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    features: HashMap<String, Feature>,
    concepts: HashSet<String>,
    rows: usize,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tab-separated row into the builder.
    ///
    /// `line_number` is 1-based and only used for diagnostics.
    pub fn fold_row(&mut self, line: &str, line_number: usize) -> Result<()> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_COLUMNS {
            return Err(PipelineError::Integrity(format!(
                "taxonomy row {line_number} has {} tab-separated fields, need at least {MIN_COLUMNS}",
                fields.len()
            ))
            .into());
        }

        let concept = fields[COL_CONCEPT].to_string();
        let feature_name = fields[COL_FEATURE];

        self.features
            .entry(feature_name.to_string())
            .or_insert_with(|| Feature {
                name: feature_name.to_string(),
                concepts: BTreeSet::new(),
                word_class: fields[COL_WORD_CLASS].to_string(),
                majority_label: fields[COL_MAJORITY].to_string(),
                minority_label: fields[COL_MINORITY].to_string(),
                category_label: fields[COL_CATEGORY].to_string(),
                distinguishing: fields[COL_DISTINGUISHING].to_string(),
            })
            .concepts
            .insert(concept.clone());

        self.concepts.insert(concept);
        self.rows += 1;
        Ok(())
    }

    /// Union another builder into this one.
    ///
    /// Concept sets merge on feature-name collision; this builder's record
    /// (labels included) wins, so merging shards in index order keeps the
    /// first-row-wins contract deterministic.
    pub fn merge(&mut self, other: RegistryBuilder) {
        for (name, feature) in other.features {
            match self.features.get_mut(&name) {
                Some(existing) => existing.concepts.extend(feature.concepts),
                None => {
                    self.features.insert(name, feature);
                }
            }
        }
        self.concepts.extend(other.concepts);
        self.rows += other.rows;
    }

    /// Freeze into the immutable registry and the concept vocabulary.
    pub fn finish(self) -> (FeatureRegistry, HashSet<String>) {
        (FeatureRegistry::new(self.features), self.concepts)
    }
}

/// Parse the annotation table into the feature registry and the set of all
/// referenced concepts. Blank lines are skipped; a non-blank row with too
/// few columns aborts the load.
pub fn load_taxonomy(path: &Path) -> Result<(FeatureRegistry, HashSet<String>)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open feature table: {}", path.display()))?;

    let mut builder = RegistryBuilder::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        builder.fold_row(&line, idx + 1)?;
    }

    let rows = builder.rows;
    let (registry, concepts) = builder.finish();
    info!(
        rows,
        features = registry.len(),
        concepts = concepts.len(),
        "Loaded concept-feature taxonomy"
    );

    Ok((registry, concepts))
}
