use crate::domain::model::Round;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence collaborator. Supplies the round snapshots the pipeline
/// aggregates; the core never queries storage itself.
#[async_trait]
pub trait RoundStore: Send + Sync {
    async fn rounds_for_course(&self, course_name: &str) -> Result<Vec<Round>>;
    async fn course_names(&self) -> Result<Vec<String>>;
}

/// Transform from a tournament/event id to an external reference URL.
pub trait EventLinks: Send + Sync {
    fn event_url(&self, event_id: u64) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn rounds_file(&self) -> &str;
    fn cluster_gap(&self) -> u32;
    fn min_group_size(&self) -> usize;
    fn event_url_base(&self) -> &str;
}
