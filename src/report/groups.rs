// Grouped statistics over cohesion scores.
//
// Scores are partitioned by each feature's broader-category label; each
// group gets count, mean, and population variance. Groups come back sorted
// ascending by mean so the least-cohesive categories lead the report.

use std::collections::HashMap;

use serde::Serialize;

use crate::analysis::CohesionResult;
use crate::taxonomy::FeatureRegistry;

/// One line of the grouped report.
#[derive(Debug, Clone, Serialize)]
pub struct LabelGroupSummary {
    pub label: String,
    /// Number of scored features carrying this label.
    pub count: usize,
    pub mean: f64,
    /// Population variance (Σ(x-μ)²/n).
    pub variance: f64,
}

/// Partition results by category label and summarize each group.
///
/// A result whose feature is missing from the registry is skipped — it
/// cannot happen through the pipeline (results are produced from the same
/// registry) but keeps this function total.
pub fn group_by_category(
    results: &[CohesionResult],
    registry: &FeatureRegistry,
) -> Vec<LabelGroupSummary> {
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for result in results {
        if let Some(feature) = registry.get(&result.feature) {
            groups
                .entry(feature.category_label.as_str())
                .or_default()
                .push(result.score);
        }
    }

    let mut summaries: Vec<LabelGroupSummary> = groups
        .into_iter()
        .map(|(label, scores)| {
            let n = scores.len() as f64;
            let mean = scores.iter().sum::<f64>() / n;
            let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
            LabelGroupSummary {
                label: label.to_string(),
                count: scores.len(),
                mean,
                variance,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        a.mean
            .partial_cmp(&b.mean)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    summaries
}
