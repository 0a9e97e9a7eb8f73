use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reported layout record, in its storage form. The par and distance
/// sequences are comma-separated text fields as the upstream recorder
/// produces them; they are parsed on demand and rejected, never repaired,
/// when malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub layout_name: String,
    pub num_holes: u32,
    pub pars: String,
    pub distances: Option<String>,
    pub total_par: u32,
    pub total_distance: Option<u32>,
}

impl Layout {
    /// Per-hole par values, or `None` if any field fails to parse.
    pub fn parsed_pars(&self) -> Option<Vec<u32>> {
        parse_hole_fields(&self.pars)
    }

    /// Per-hole distances, or `None` if absent or any field fails to parse.
    pub fn parsed_distances(&self) -> Option<Vec<u32>> {
        parse_hole_fields(self.distances.as_deref()?)
    }

    /// Structural invariant for a layout to be aggregatable: both sequences
    /// contain exactly `num_holes` non-negative integers, and the total
    /// distance is present (the clusterer keys on it).
    pub fn has_complete_data(&self) -> bool {
        let Some(distances) = self.distances.as_deref() else {
            return false;
        };
        if self.total_distance.is_none() {
            return false;
        }

        let distance_fields: Vec<&str> = split_hole_fields(distances);
        let par_fields: Vec<&str> = split_hole_fields(&self.pars);

        distance_fields.len() == self.num_holes as usize
            && par_fields.len() == self.num_holes as usize
            && distance_fields.iter().all(|f| is_digits(f))
            && par_fields.iter().all(|f| is_digits(f))
    }
}

/// One played round. External entity owned by the persistence layer; the
/// core reads it and never mutates or stores it. `par_rating` and
/// `stroke_value` are opaque rating parameters supplied upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round_id: u64,
    pub event_id: u64,
    pub played_on: Option<NaiveDate>,
    pub scores: Vec<i32>,
    pub par_rating: f64,
    pub stroke_value: f64,
    pub layout: Layout,
}

fn split_hole_fields(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

fn parse_hole_fields(raw: &str) -> Option<Vec<u32>> {
    split_hole_fields(raw)
        .into_iter()
        .map(|field| field.parse().ok())
        .collect()
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}
