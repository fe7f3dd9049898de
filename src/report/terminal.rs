// Colored terminal output for the cohesion and group tables.
//
// All terminal-specific formatting lives here; the pipeline hands over
// already-sorted data.

use colored::Colorize;

use crate::analysis::CohesionResult;

use super::groups::LabelGroupSummary;

/// Display the per-feature cohesion table.
///
/// Expects results sorted ascending by score — the least cohesive (most
/// semantically scattered) features surface first.
pub fn display_feature_scores(results: &[CohesionResult]) {
    if results.is_empty() {
        println!("No features fell inside the eligibility window — nothing to report.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Feature Cohesion ({} features) ===", results.len()).bold()
    );
    println!();
    println!(
        "  {:<40} {:>5}  {:>9}",
        "Feature".dimmed(),
        "N".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for result in results {
        let score_str = format!("{:>9.6}", result.score);
        let colored_score = if result.score >= 0.8 {
            score_str.green()
        } else if result.score >= 0.5 {
            score_str.normal()
        } else {
            score_str.yellow()
        };
        println!(
            "  {:<40} {:>5}  {}",
            result.feature, result.sample_size, colored_score
        );
    }
}

/// Display the per-category summary, sorted ascending by mean.
pub fn display_label_groups(summaries: &[LabelGroupSummary]) {
    if summaries.is_empty() {
        return;
    }

    println!("\n{}", "=== Grouping by category label ===".bold());
    println!();
    println!(
        "  {:<25} {:>5}  {:>9}  {:>9}",
        "Label".dimmed(),
        "N".dimmed(),
        "Mean".dimmed(),
        "Variance".dimmed(),
    );
    println!("  {}", "-".repeat(53).dimmed());

    for summary in summaries {
        println!(
            "  {:<25} {:>5}  {:>9.5}  {:>9.5}",
            summary.label, summary.count, summary.mean, summary.variance
        );
    }
    println!();
}

/// Display the taxonomy-shape diagnostic: how many features have exactly
/// N associated concepts.
pub fn display_concept_histogram(histogram: &std::collections::BTreeMap<usize, usize>) {
    println!(
        "{}",
        "Features by number of associated concepts:".dimmed()
    );
    for (concept_count, feature_count) in histogram {
        println!("  {concept_count:>3} concepts: {feature_count} features");
    }
}
