use crate::domain::model::Round;

/// Default gap threshold, in the same unit as layout distances (feet).
pub const DEFAULT_CLUSTER_GAP: u32 = 200;

/// Observed total-distance span of one cluster, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRange {
    pub min: u32,
    pub max: u32,
}

/// Partitions rounds by total layout distance using single-linkage
/// chaining: rounds connected through pairwise gaps of at most `max_gap`
/// share a cluster. In one dimension the dendrogram cut at `max_gap` is
/// exactly the partition obtained by sorting the values and breaking at
/// every adjacent gap wider than the threshold.
///
/// Clusters come out in order of first appearance in the input, members in
/// input order, so downstream grouping is reproducible. Also returns the
/// [min, max] distance range each cluster spans.
pub fn cluster_rounds<'a>(
    rounds: &[&'a Round],
    max_gap: u32,
) -> (Vec<Vec<&'a Round>>, Vec<DistanceRange>) {
    if rounds.is_empty() {
        return (Vec::new(), Vec::new());
    }

    // Rounds reach this stage pre-filtered; an absent total distance keys
    // at zero rather than panicking so the partition stays total.
    let distances: Vec<u32> = rounds
        .iter()
        .map(|round| round.layout.total_distance.unwrap_or(0))
        .collect();

    let mut order: Vec<usize> = (0..rounds.len()).collect();
    order.sort_by_key(|&i| distances[i]);

    let mut labels = vec![0usize; rounds.len()];
    let mut current = 0;
    for pair in order.windows(2) {
        if distances[pair[1]] - distances[pair[0]] > max_gap {
            current += 1;
        }
        labels[pair[1]] = current;
    }

    // Regroup in input order; a cluster is keyed by the slot its first
    // member claims.
    let mut slots = vec![usize::MAX; current + 1];
    let mut clusters: Vec<Vec<&Round>> = Vec::new();
    for (i, &round) in rounds.iter().enumerate() {
        let label = labels[i];
        if slots[label] == usize::MAX {
            slots[label] = clusters.len();
            clusters.push(Vec::new());
        }
        clusters[slots[label]].push(round);
    }

    let ranges = clusters
        .iter()
        .map(|cluster| {
            let totals = cluster
                .iter()
                .map(|round| round.layout.total_distance.unwrap_or(0));
            DistanceRange {
                min: totals.clone().min().unwrap_or(0),
                max: totals.max().unwrap_or(0),
            }
        })
        .collect();

    (clusters, ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Layout;

    fn round(round_id: u64, total_distance: u32) -> Round {
        Round {
            round_id,
            event_id: 1,
            played_on: None,
            scores: vec![],
            par_rating: 50.0,
            stroke_value: 1.0,
            layout: Layout {
                layout_name: "Main".to_string(),
                num_holes: 3,
                pars: "3, 3, 3".to_string(),
                distances: Some("300, 300, 300".to_string()),
                total_par: 9,
                total_distance: Some(total_distance),
            },
        }
    }

    fn cluster_ids(rounds: &[Round], max_gap: u32) -> Vec<Vec<u64>> {
        let refs: Vec<&Round> = rounds.iter().collect();
        let (clusters, _) = cluster_rounds(&refs, max_gap);
        clusters
            .iter()
            .map(|c| c.iter().map(|r| r.round_id).collect())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let (clusters, ranges) = cluster_rounds(&[], 200);
        assert!(clusters.is_empty());
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_single_round() {
        let rounds = vec![round(1, 5000)];
        assert_eq!(cluster_ids(&rounds, 200), vec![vec![1]]);
    }

    #[test]
    fn test_wide_gap_splits() {
        let rounds = vec![round(1, 5000), round(2, 5300)];
        assert_eq!(cluster_ids(&rounds, 200), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_chain_bridges_wide_gap() {
        // 5000 and 5300 differ by more than the threshold, but 5150
        // chains them together under single linkage.
        let rounds = vec![round(1, 5000), round(2, 5300), round(3, 5150)];
        assert_eq!(cluster_ids(&rounds, 200), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let rounds = vec![
            round(1, 5000),
            round(2, 7000),
            round(3, 5100),
            round(4, 7100),
            round(5, 9000),
        ];
        let clusters = cluster_ids(&rounds, 200);
        let mut seen: Vec<u64> = clusters.iter().flatten().copied().collect();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(clusters.len(), 3);
    }

    #[test]
    fn test_members_keep_input_order() {
        let rounds = vec![round(1, 5100), round(2, 9000), round(3, 5000)];
        let clusters = cluster_ids(&rounds, 200);
        // First cluster is the one round 1 appears in, members in input order.
        assert_eq!(clusters, vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_ranges_span_clusters() {
        let rounds = vec![round(1, 5100), round(2, 9000), round(3, 5000)];
        let refs: Vec<&Round> = rounds.iter().collect();
        let (_, ranges) = cluster_rounds(&refs, 200);
        assert_eq!(ranges[0], DistanceRange { min: 5000, max: 5100 });
        assert_eq!(ranges[1], DistanceRange { min: 9000, max: 9000 });
    }

    #[test]
    fn test_gap_exactly_at_threshold_merges() {
        let rounds = vec![round(1, 5000), round(2, 5200)];
        assert_eq!(cluster_ids(&rounds, 200), vec![vec![1, 2]]);
    }
}
