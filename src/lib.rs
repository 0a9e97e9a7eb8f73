pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{JsonRoundStore, PdgaLiveLinks};

pub use core::aggregate::AggregateLayout;
pub use core::engine::{CourseRating, RatingEngine, RatingStatus};
pub use core::pipeline::aggregate_layouts;
pub use utils::error::{CaddieError, Result};
