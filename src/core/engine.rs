use crate::core::aggregate::AggregateLayout;
use crate::core::pipeline::aggregate_layouts;
use crate::domain::ports::{ConfigProvider, RoundStore};
use crate::utils::error::Result;
use serde::{Serialize, Serializer};

/// Aggregates smaller than this are hidden from results unless the caller
/// overrides the threshold; tiny groups are usually recorder noise.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 10;

/// Outcome code carried to the presentation boundary. The pipeline itself
/// never raises these; they are derived from what it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingStatus {
    None,
    Success,
    NoMatches,
    NoLayouts,
    NoRounds,
}

impl RatingStatus {
    pub fn code(self) -> i8 {
        match self {
            RatingStatus::None => -1,
            RatingStatus::Success => 0,
            RatingStatus::NoMatches => 1,
            RatingStatus::NoLayouts => 2,
            RatingStatus::NoRounds => 3,
        }
    }
}

impl Serialize for RatingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// Full response for one course query.
#[derive(Debug, Clone, Serialize)]
pub struct CourseRating {
    pub status: RatingStatus,
    pub course_name: String,
    pub num_results: usize,
    pub layouts: Vec<AggregateLayout>,
}

impl CourseRating {
    fn empty(course_name: &str, status: RatingStatus) -> Self {
        Self {
            status,
            course_name: course_name.to_string(),
            num_results: 0,
            layouts: Vec::new(),
        }
    }
}

/// Drives one course query end to end: fetch the round snapshot through
/// the persistence port, run the aggregation pipeline, apply the
/// minimum-group-size policy, and report with a status code.
pub struct RatingEngine<S: RoundStore, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: RoundStore, C: ConfigProvider> RatingEngine<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }

    pub async fn course_rating(&self, course_name: &str) -> Result<CourseRating> {
        let rounds = self.store.rounds_for_course(course_name).await?;
        if rounds.is_empty() {
            tracing::info!("No rounds recorded for {}", course_name);
            return Ok(CourseRating::empty(course_name, RatingStatus::NoRounds));
        }

        let aggregates = aggregate_layouts(&rounds, self.config.cluster_gap())?;
        if aggregates.is_empty() {
            tracing::info!("No usable layouts among {} rounds for {}", rounds.len(), course_name);
            return Ok(CourseRating::empty(course_name, RatingStatus::NoLayouts));
        }

        let layouts: Vec<AggregateLayout> = aggregates
            .into_iter()
            .filter(|aggregate| aggregate.num_layouts >= self.config.min_group_size())
            .collect();
        tracing::info!("Generated {} layouts for {}", layouts.len(), course_name);

        if layouts.is_empty() {
            return Ok(CourseRating::empty(course_name, RatingStatus::NoMatches));
        }

        Ok(CourseRating {
            status: RatingStatus::Success,
            course_name: course_name.to_string(),
            num_results: layouts.len(),
            layouts,
        })
    }

    pub async fn course_names(&self) -> Result<Vec<String>> {
        self.store.course_names().await
    }
}
