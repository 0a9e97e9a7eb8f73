pub mod aggregate;
pub mod cluster;
pub mod engine;
pub mod filter;
pub mod grouping;
pub mod pipeline;

pub use crate::domain::model::{Layout, Round};
pub use crate::domain::ports::{ConfigProvider, EventLinks, RoundStore};
pub use crate::utils::error::Result;
