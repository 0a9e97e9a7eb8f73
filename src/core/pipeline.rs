use crate::core::aggregate::AggregateLayout;
use crate::core::cluster::cluster_rounds;
use crate::core::filter::filter_rounds;
use crate::core::grouping::group_by_pars;
use crate::domain::model::Round;
use crate::utils::error::Result;

/// Runs the full aggregation pipeline over one course's rounds:
/// filter out unusable layouts, cluster by total distance, sub-group by
/// par sequence, then build one aggregate per final group. The result is
/// sorted by descending member count (a confidence proxy); the sort is
/// stable so identical inputs always produce identical output.
pub fn aggregate_layouts(rounds: &[Round], max_gap: u32) -> Result<Vec<AggregateLayout>> {
    if rounds.is_empty() {
        return Ok(Vec::new());
    }

    let filtered = filter_rounds(rounds);
    tracing::debug!(
        "Filtered {} of {} rounds with complete layout data",
        filtered.len(),
        rounds.len()
    );

    let (clusters, ranges) = cluster_rounds(&filtered, max_gap);
    for (cluster, range) in clusters.iter().zip(&ranges) {
        tracing::debug!(
            "Distance cluster of {} rounds spanning {}..{} feet",
            cluster.len(),
            range.min,
            range.max
        );
    }

    let mut aggregated = Vec::new();
    for cluster in &clusters {
        for group in group_by_pars(cluster) {
            // TODO drop per-hole distance outliers within a group before
            // averaging; groups currently keep every surviving member.
            aggregated.push(AggregateLayout::from_rounds(&group)?);
        }
    }

    aggregated.sort_by(|a, b| b.num_layouts.cmp(&a.num_layouts));
    Ok(aggregated)
}
