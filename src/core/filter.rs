use crate::domain::model::Round;

/// Drops rounds whose layout lacks the data needed for aggregation.
/// Malformed records are routine upstream noise, so exclusion is silent;
/// the surviving rounds keep their relative order.
pub fn filter_rounds(rounds: &[Round]) -> Vec<&Round> {
    rounds
        .iter()
        .filter(|round| round.layout.has_complete_data())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Layout;

    fn round(round_id: u64, pars: &str, distances: Option<&str>, num_holes: u32) -> Round {
        Round {
            round_id,
            event_id: 1,
            played_on: None,
            scores: vec![],
            par_rating: 50.0,
            stroke_value: 1.0,
            layout: Layout {
                layout_name: "Main".to_string(),
                num_holes,
                pars: pars.to_string(),
                distances: distances.map(str::to_string),
                total_par: 27,
                total_distance: Some(1270),
            },
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_rounds(&[]).is_empty());
    }

    #[test]
    fn test_keeps_complete_rounds_in_order() {
        let rounds = vec![
            round(1, "3, 3, 3", Some("300, 450, 520"), 3),
            round(2, "3, 3, 3", Some("300, 450, 520"), 3),
        ];
        let kept = filter_rounds(&rounds);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].round_id, 1);
        assert_eq!(kept[1].round_id, 2);
    }

    #[test]
    fn test_excludes_mismatched_lengths() {
        let rounds = vec![
            round(1, "3, 3", Some("300, 450, 520"), 3),
            round(2, "3, 3, 3", Some("300, 450"), 3),
            round(3, "3, 3, 3", Some("300, 450, 520"), 3),
        ];
        let kept = filter_rounds(&rounds);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].round_id, 3);
    }

    #[test]
    fn test_excludes_non_digit_fields() {
        let rounds = vec![
            round(1, "3, 3, x", Some("300, 450, 520"), 3),
            round(2, "3, 3, 3", Some("300, ???, 520"), 3),
        ];
        assert!(filter_rounds(&rounds).is_empty());
    }

    #[test]
    fn test_excludes_missing_distances() {
        let rounds = vec![round(1, "3, 3, 3", None, 3)];
        assert!(filter_rounds(&rounds).is_empty());
    }

    #[test]
    fn test_preserves_subsequence_order_around_exclusions() {
        let rounds = vec![
            round(1, "3, 3, 3", Some("300, 450, 520"), 3),
            round(2, "bad", Some("300"), 3),
            round(3, "3, 3, 3", Some("310, 460, 530"), 3),
        ];
        let kept = filter_rounds(&rounds);
        let ids: Vec<u64> = kept.iter().map(|r| r.round_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
