// Feature records and the frozen registry built from the annotation table.
//
// A Feature groups every concept annotated with it, plus the label fields
// carried through from the source table. The labels are opaque to the
// analysis — only the reporter reads them, and only `category_label` drives
// the grouped summary.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// One taxonomy feature and the concepts annotated with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Unique feature identifier (e.g. "is_round").
    pub name: String,
    /// Concepts annotated with this feature. Non-empty once loading
    /// completes — a record is only created on its first association.
    /// Ordered so the analysis visits concepts reproducibly.
    pub concepts: BTreeSet<String>,
    /// Word-class label (WB label in the source data).
    pub word_class: String,
    /// Majority sub-label.
    pub majority_label: String,
    /// Minority sub-label.
    pub minority_label: String,
    /// Broader-category label — the grouping key for the summary report.
    pub category_label: String,
    /// Distinguishing attribute.
    pub distinguishing: String,
}

/// Immutable map of feature name → record, finalized after the table scan.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    features: HashMap<String, Feature>,
}

impl FeatureRegistry {
    pub(crate) fn new(features: HashMap<String, Feature>) -> Self {
        Self { features }
    }

    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.features.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Distribution of "number of features having exactly N associated
    /// concepts" — a diagnostic for the taxonomy's shape, sorted by N.
    /// Has no influence on the analysis.
    pub fn concept_count_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for feature in self.features.values() {
            *histogram.entry(feature.concepts.len()).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(name: &str, concepts: &[&str]) -> Feature {
        Feature {
            name: name.to_string(),
            concepts: concepts.iter().map(|c| c.to_string()).collect(),
            word_class: "adjective".to_string(),
            majority_label: "maj".to_string(),
            minority_label: "min".to_string(),
            category_label: "visual".to_string(),
            distinguishing: "0".to_string(),
        }
    }

    #[test]
    fn test_histogram_counts_by_concept_set_size() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), feature("a", &["c1", "c2"]));
        map.insert("b".to_string(), feature("b", &["c3", "c4"]));
        map.insert("c".to_string(), feature("c", &["c5"]));
        let registry = FeatureRegistry::new(map);

        let histogram = registry.concept_count_histogram();
        assert_eq!(histogram[&1], 1);
        assert_eq!(histogram[&2], 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry = FeatureRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.concept_count_histogram().is_empty());
    }
}
