use crate::core::{EventLinks, Round, RoundStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;

/// Local stand-in for the persistence collaborator: a JSON file mapping
/// course names to their recorded rounds. Re-read on every query so edits
/// to the file show up without restarting.
#[derive(Debug, Clone)]
pub struct JsonRoundStore {
    path: String,
}

impl JsonRoundStore {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<HashMap<String, Vec<Round>>> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }
}

#[async_trait]
impl RoundStore for JsonRoundStore {
    async fn rounds_for_course(&self, course_name: &str) -> Result<Vec<Round>> {
        let mut courses = self.load()?;
        Ok(courses.remove(course_name).unwrap_or_default())
    }

    async fn course_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.load()?.into_keys().collect();
        names.sort();
        Ok(names)
    }
}

/// Tournament reference links by event id.
#[derive(Debug, Clone)]
pub struct PdgaLiveLinks {
    base_url: String,
}

impl PdgaLiveLinks {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

impl EventLinks for PdgaLiveLinks {
    fn event_url(&self, event_id: u64) -> String {
        format!("{}{}", self.base_url, event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rounds_fixture() -> serde_json::Value {
        serde_json::json!({
            "Maple Hill": [
                {
                    "round_id": 1,
                    "event_id": 77750,
                    "played_on": "2024-08-22",
                    "scores": [3, 3, 4],
                    "par_rating": 61.0,
                    "stroke_value": 1.0,
                    "layout": {
                        "layout_name": "Blue Tees",
                        "num_holes": 3,
                        "pars": "3, 3, 3",
                        "distances": "300, 310, 410",
                        "total_par": 9,
                        "total_distance": 1020
                    }
                }
            ],
            "Borderland": []
        })
    }

    fn store_with_fixture() -> (NamedTempFile, JsonRoundStore) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", rounds_fixture()).unwrap();
        let store = JsonRoundStore::new(file.path().to_str().unwrap().to_string());
        (file, store)
    }

    #[tokio::test]
    async fn test_rounds_for_course() {
        let (_file, store) = store_with_fixture();
        let rounds = store.rounds_for_course("Maple Hill").await.unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].event_id, 77750);
        assert_eq!(rounds[0].layout.layout_name, "Blue Tees");
        assert_eq!(rounds[0].layout.total_distance, Some(1020));
    }

    #[tokio::test]
    async fn test_unknown_course_is_empty() {
        let (_file, store) = store_with_fixture();
        assert!(store.rounds_for_course("Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_course_names_sorted() {
        let (_file, store) = store_with_fixture();
        let names = store.course_names().await.unwrap();
        assert_eq!(names, vec!["Borderland", "Maple Hill"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let store = JsonRoundStore::new("does-not-exist.json".to_string());
        assert!(store.course_names().await.is_err());
    }

    #[test]
    fn test_event_url_concatenates_id() {
        let links = PdgaLiveLinks::new("https://example.com/event/".to_string());
        assert_eq!(links.event_url(77750), "https://example.com/event/77750");
    }
}
