// Per-feature cohesion scoring.
//
// A feature's score is the mean cosine similarity between each concept's
// unit embedding and the unit centroid of the group — how tightly the
// concept set clusters around its own mean direction. Scores live in
// [-1, 1]; higher means semantically tighter.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::embeddings::EmbeddingStore;
use crate::taxonomy::{Feature, FeatureRegistry};

use super::vector::{dot, l2_normalize, mean_vector};

/// Eligibility window on the number of embeddable concepts, inclusive.
/// Below 4 the score isn't statistically meaningful; above 7 broad sets
/// dilute the centroid.
pub const MIN_SAMPLE: usize = 4;
pub const MAX_SAMPLE: usize = 7;

/// A scored feature.
#[derive(Debug, Clone, Serialize)]
pub struct CohesionResult {
    pub feature: String,
    /// Number of concepts that had an embedding and contributed.
    pub sample_size: usize,
    /// Mean cosine similarity to the group centroid, in [-1, 1].
    pub score: f64,
}

/// Score one feature, or None when its embeddable-concept count falls
/// outside [MIN_SAMPLE, MAX_SAMPLE]. Concepts without an embedding are
/// dropped silently before the eligibility check.
pub fn analyze_feature(feature: &Feature, store: &EmbeddingStore) -> Option<CohesionResult> {
    let gathered: Vec<&[f64]> = feature
        .concepts
        .iter()
        .filter_map(|concept| store.vector(concept))
        .collect();

    if gathered.len() < MIN_SAMPLE || gathered.len() > MAX_SAMPLE {
        return None;
    }

    let normalized: Vec<Vec<f64>> = gathered.iter().map(|v| l2_normalize(v)).collect();
    let centroid = l2_normalize(&mean_vector(&normalized));

    let score = normalized
        .iter()
        .map(|v| dot(v, &centroid))
        .sum::<f64>()
        / normalized.len() as f64;

    debug!(
        feature = %feature.name,
        sample_size = normalized.len(),
        score,
        "Scored feature"
    );

    Some(CohesionResult {
        feature: feature.name.clone(),
        sample_size: normalized.len(),
        score,
    })
}

/// Score every eligible feature in the registry.
///
/// Features are independent and the store is read-only, so the pass fans
/// out across rayon workers. Results come back in arbitrary order — the
/// reporter sorts them.
pub fn analyze_registry(registry: &FeatureRegistry, store: &EmbeddingStore) -> Vec<CohesionResult> {
    registry
        .iter()
        .collect::<Vec<_>>()
        .par_iter()
        .filter_map(|feature| analyze_feature(feature, store))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(concepts: &[&str]) -> Feature {
        Feature {
            name: "f1".to_string(),
            concepts: concepts.iter().map(|c| c.to_string()).collect(),
            word_class: String::new(),
            majority_label: String::new(),
            minority_label: String::new(),
            category_label: String::new(),
            distinguishing: String::new(),
        }
    }

    fn store_of(entries: &[(&str, Vec<f64>)]) -> EmbeddingStore {
        let tokens = entries.iter().map(|(t, _)| t.to_string()).collect();
        let vectors = entries.iter().map(|(_, v)| v.clone()).collect();
        EmbeddingStore::from_parts(tokens, vectors)
    }

    fn axis(i: usize) -> Vec<f64> {
        let mut v = vec![0.0; 4];
        v[i] = 1.0;
        v
    }

    #[test]
    fn test_below_window_is_absent() {
        let store = store_of(&[
            ("a", axis(0)),
            ("b", axis(1)),
            ("c", axis(2)),
        ]);
        assert!(analyze_feature(&feature(&["a", "b", "c"]), &store).is_none());
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let entries: Vec<(String, Vec<f64>)> = (0..8)
            .map(|i| (format!("c{i}"), vec![1.0, i as f64 * 0.01]))
            .collect();
        let refs: Vec<(&str, Vec<f64>)> = entries
            .iter()
            .map(|(t, v)| (t.as_str(), v.clone()))
            .collect();
        let store = store_of(&refs);

        let names: Vec<String> = (0..8).map(|i| format!("c{i}")).collect();
        let of = |n: usize| {
            let subset: Vec<&str> = names[..n].iter().map(|s| s.as_str()).collect();
            analyze_feature(&feature(&subset), &store)
        };

        assert!(of(3).is_none(), "3 concepts: below the window");
        assert!(of(4).is_some(), "4 concepts: lower bound included");
        assert!(of(7).is_some(), "7 concepts: upper bound included");
        assert!(of(8).is_none(), "8 concepts: above the window");
    }

    #[test]
    fn test_missing_embeddings_drop_before_eligibility() {
        // 5 concepts but only 3 have embeddings — ineligible.
        let store = store_of(&[("a", axis(0)), ("b", axis(1)), ("c", axis(2))]);
        let f = feature(&["a", "b", "c", "ghost1", "ghost2"]);
        assert!(analyze_feature(&f, &store).is_none());

        // 6 concepts, 4 embeddable — eligible with sample_size 4.
        let store = store_of(&[
            ("a", axis(0)),
            ("b", axis(1)),
            ("c", axis(2)),
            ("d", axis(3)),
        ]);
        let f = feature(&["a", "b", "c", "d", "ghost1", "ghost2"]);
        let result = analyze_feature(&f, &store).unwrap();
        assert_eq!(result.sample_size, 4);
    }

    #[test]
    fn test_identical_vectors_score_exactly_one() {
        let store = store_of(&[
            ("a", vec![2.0, 0.0]),
            ("b", vec![5.0, 0.0]),
            ("c", vec![0.5, 0.0]),
            ("d", vec![9.0, 0.0]),
        ]);
        let result = analyze_feature(&feature(&["a", "b", "c", "d"]), &store).unwrap();
        assert!(
            (result.score - 1.0).abs() < 1e-12,
            "Identical directions must score exactly 1.0, got {}",
            result.score
        );
    }

    #[test]
    fn test_scattered_scores_below_tight() {
        let tight = store_of(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![0.9, 0.1]),
            ("c", vec![0.95, 0.05]),
            ("d", vec![1.0, 0.02]),
        ]);
        let tight_score = analyze_feature(&feature(&["a", "b", "c", "d"]), &tight)
            .unwrap()
            .score;

        let scattered = store_of(&[
            ("a", axis(0)),
            ("b", axis(1)),
            ("c", axis(2)),
            ("d", axis(3)),
        ]);
        let scattered_score = analyze_feature(&feature(&["a", "b", "c", "d"]), &scattered)
            .unwrap()
            .score;

        assert!(
            tight_score > scattered_score,
            "tight {tight_score} should beat scattered {scattered_score}"
        );
        assert!(tight_score <= 1.0 && tight_score >= -1.0);
        assert!(scattered_score <= 1.0 && scattered_score >= -1.0);
    }

    #[test]
    fn test_mixed_direction_example_is_deterministic() {
        // The 2-D worked example: three near-identical vectors and one
        // opposite. Score must be identical across runs.
        let entries = [
            ("c1", vec![1.0, 0.0]),
            ("c2", vec![0.9, 0.1]),
            ("c3", vec![0.95, 0.05]),
            ("c4", vec![-1.0, 0.0]),
        ];
        let store = store_of(&entries);
        let f = feature(&["c1", "c2", "c3", "c4"]);

        let first = analyze_feature(&f, &store).unwrap();
        let second = analyze_feature(&f, &store).unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.sample_size, 4);
        assert!(first.score > -1.0 && first.score < 1.0);
    }
}
