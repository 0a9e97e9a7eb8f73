use crate::domain::model::Round;
use std::collections::HashMap;

/// Splits one distance cluster into exact-match groups sharing an ordered
/// par sequence. This is equivalence-class partitioning on the parsed par
/// key: equal sequences land in the same group wherever they sit in the
/// cluster, with no reliance on adjacency or prior sorting. Groups come
/// out in first-seen order, members in input order.
pub fn group_by_pars<'a>(cluster: &[&'a Round]) -> Vec<Vec<&'a Round>> {
    let mut slots: HashMap<Option<Vec<u32>>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Round>> = Vec::new();

    for &round in cluster {
        let key = round.layout.parsed_pars();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(round);
    }

    groups
}
