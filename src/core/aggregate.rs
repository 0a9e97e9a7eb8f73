use crate::domain::model::Round;
use crate::domain::ports::EventLinks;
use crate::utils::error::{CaddieError, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Synthesized representation of a group of layouts judged to be the same
/// physical configuration. Built once per final group and never mutated;
/// serializes to the flat mapping the presentation boundary expects.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateLayout {
    pub num_layouts: usize,
    pub num_tournaments: usize,
    pub num_holes: u32,
    pub distances: Vec<u32>,
    pub total_distance: u32,
    pub pars: Vec<u32>,
    pub total_par: u32,
    pub layout_names: Vec<String>,
    pub layout_tokens: Vec<String>,
    pub descriptive_name: String,
    pub par_rating: i32,
    pub stroke_value: i32,
    #[serde(skip)]
    event_ids: BTreeSet<u64>,
    #[serde(skip)]
    member_total_distances: Vec<u32>,
}

impl AggregateLayout {
    /// Builds the aggregate for one group of rounds sharing a hole count
    /// and par sequence (guaranteed by the par sub-grouper). An empty
    /// group is a caller bug and fails fast; a structurally incomplete
    /// layout slipping past the filter does too.
    pub fn from_rounds(rounds: &[&Round]) -> Result<Self> {
        let first = rounds.first().ok_or(CaddieError::EmptyGroupError)?;
        let num_layouts = rounds.len();
        let num_holes = first.layout.num_holes;

        let mut member_distances: Vec<Vec<u32>> = Vec::with_capacity(num_layouts);
        let mut member_total_distances: Vec<u32> = Vec::with_capacity(num_layouts);
        for round in rounds {
            let distances = round
                .layout
                .parsed_distances()
                .filter(|d| d.len() == num_holes as usize)
                .ok_or_else(|| malformed(&round.layout.layout_name))?;
            member_distances.push(distances);
            member_total_distances.push(
                round
                    .layout
                    .total_distance
                    .ok_or_else(|| malformed(&round.layout.layout_name))?,
            );
        }

        let distances = (0..num_holes as usize)
            .map(|hole| truncated_mean(member_distances.iter().map(|d| d[hole])))
            .collect();
        let total_distance = truncated_mean(member_total_distances.iter().copied());

        let pars = first
            .layout
            .parsed_pars()
            .ok_or_else(|| malformed(&first.layout.layout_name))?;

        let layout_names: Vec<String> = rounds
            .iter()
            .map(|round| round.layout.layout_name.clone())
            .collect();
        let layout_tokens = rank_name_tokens(&layout_names);
        let descriptive_name = descriptive_name(&layout_tokens);

        let event_ids: BTreeSet<u64> = rounds.iter().map(|round| round.event_id).collect();

        Ok(Self {
            num_layouts,
            num_tournaments: event_ids.len(),
            num_holes,
            distances,
            total_distance,
            pars,
            total_par: first.layout.total_par,
            layout_names,
            layout_tokens,
            descriptive_name,
            par_rating: truncated_mean_f64(rounds.iter().map(|round| round.par_rating)),
            stroke_value: truncated_mean_f64(rounds.iter().map(|round| round.stroke_value)),
            event_ids,
            member_total_distances,
        })
    }

    /// Linear handicap transform for a raw score relative to par.
    pub fn score_rating(&self, score: i32) -> i32 {
        self.par_rating - score * self.stroke_value
    }

    /// How many of the caller's keywords appear in the token vocabulary.
    /// Used to rank aggregates against free-text layout queries.
    pub fn score_layout_tokens(&self, keywords: &[&str]) -> usize {
        keywords
            .iter()
            .filter(|keyword| self.layout_tokens.contains(&keyword.to_lowercase()))
            .count()
    }

    /// Population standard deviation of member total distances. Diagnostic
    /// only; not part of the serialized mapping.
    pub fn distance_std_dev(&self) -> u32 {
        let n = self.member_total_distances.len() as f64;
        let mean = self.member_total_distances.iter().sum::<u32>() as f64 / n;
        let variance = self
            .member_total_distances
            .iter()
            .map(|&d| (d as f64 - mean).powi(2))
            .sum::<f64>()
            / n;
        variance.sqrt() as u32
    }

    pub fn course_metadata(&self) -> String {
        format!(
            "Par {}, Distance {} feet",
            self.total_par, self.total_distance
        )
    }

    /// One markdown-style reference link per distinct event id, ascending.
    pub fn layout_links(&self, links: &impl EventLinks) -> Vec<String> {
        self.event_ids
            .iter()
            .map(|&id| format!("[{}]({})", id, links.event_url(id)))
            .collect()
    }

    /// Per-hole "H{n} p{par} {distance}" lines, split into `columns`
    /// newline-joined blocks for tabular presentation.
    pub fn hole_distance_columns(&self, columns: usize) -> Vec<String> {
        let columns = columns.max(1);
        let mut per_column = self.distances.len() / columns;
        if self.distances.len() % columns != 0 {
            per_column += 1;
        }

        (0..columns)
            .map(|column| {
                self.distances
                    .iter()
                    .zip(&self.pars)
                    .enumerate()
                    .skip(column * per_column)
                    .take(per_column)
                    .map(|(hole, (distance, par))| format!("H{} p{} {}", hole + 1, par, distance))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect()
    }
}

fn malformed(layout_name: &str) -> CaddieError {
    CaddieError::AggregationError {
        message: format!("layout '{}' has incomplete data", layout_name),
    }
}

fn truncated_mean(values: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    (sum / count) as u32
}

fn truncated_mean_f64(values: impl Iterator<Item = f64>) -> i32 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (sum / count as f64).trunc() as i32
}

/// Token vocabulary across the raw layout names: lower-cased, split on
/// single spaces, ranked by descending frequency with ties kept in
/// first-seen order, restricted to alphanumeric tokens longer than two
/// characters.
fn rank_name_tokens(names: &[String]) -> Vec<String> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for name in names {
        for token in name.to_lowercase().split(' ') {
            let count = frequencies.entry(token.to_string()).or_insert(0);
            if *count == 0 {
                first_seen.push(token.to_string());
            }
            *count += 1;
        }
    }

    let mut ranked = first_seen;
    ranked.sort_by_key(|token| std::cmp::Reverse(frequencies[token]));
    ranked.retain(|token| {
        token.chars().count() > 2 && token.chars().all(char::is_alphanumeric)
    });
    ranked
}

/// First five ranked tokens that are not purely numeric, comma-joined.
/// Empty when nothing survives.
fn descriptive_name(tokens: &[String]) -> String {
    tokens
        .iter()
        .filter(|token| !token.chars().all(char::is_numeric))
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
