//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Strand API server.
//! Resources are stored as raw JSON values, the same shape the real API
//! serves, keyed by id in sorted order so listings paginate
//! deterministically.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Folders indexed by id (e.g., "fld_h0LWbdTq").
    pub folders: BTreeMap<String, Value>,

    /// Projects indexed by id (e.g., "prj_aXkT2qVc").
    pub projects: BTreeMap<String, Value>,

    /// DNA sequences indexed by id (e.g., "seq_VgkHvT2P").
    pub sequences: BTreeMap<String, Value>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a folder to the state.
    pub fn with_folder(mut self, folder: Value) -> Self {
        self.folders.insert(id_of(&folder), folder);
        self
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Value) -> Self {
        self.projects.insert(id_of(&project), project);
        self
    }

    /// Add a DNA sequence to the state.
    pub fn with_sequence(mut self, sequence: Value) -> Self {
        self.sequences.insert(id_of(&sequence), sequence);
        self
    }

    /// Get a folder by id.
    pub fn get_folder(&self, id: &str) -> Option<&Value> {
        self.folders.get(id)
    }

    /// Get a project by id.
    pub fn get_project(&self, id: &str) -> Option<&Value> {
        self.projects.get(id)
    }

    /// Get a DNA sequence by id.
    pub fn get_sequence(&self, id: &str) -> Option<&Value> {
        self.sequences.get(id)
    }

    /// List folders, optionally filtered by project and name substring.
    pub fn list_folders(&self, project_id: Option<&str>, name: Option<&str>) -> Vec<&Value> {
        self.folders
            .values()
            .filter(|f| matches_field(f, "projectId", project_id))
            .filter(|f| matches_name(f, name))
            .collect()
    }

    /// List projects, optionally filtered by name substring.
    pub fn list_projects(&self, name: Option<&str>) -> Vec<&Value> {
        self.projects
            .values()
            .filter(|p| matches_name(p, name))
            .collect()
    }

    /// List DNA sequences, optionally filtered by folder and name substring.
    pub fn list_sequences(&self, folder_id: Option<&str>, name: Option<&str>) -> Vec<&Value> {
        self.sequences
            .values()
            .filter(|s| matches_field(s, "folderId", folder_id))
            .filter(|s| matches_name(s, name))
            .collect()
    }
}

/// Pull the id out of a fixture value.
///
/// Panics when the value has none; mock data without an id cannot be served.
fn id_of(value: &Value) -> String {
    value
        .get("id")
        .and_then(Value::as_str)
        .expect("mock resource carries a string 'id'")
        .to_string()
}

/// Exact-match filter on a scalar string field; no filter matches everything.
fn matches_field(value: &Value, field: &str, wanted: Option<&str>) -> bool {
    wanted
        .map(|w| value.get(field).and_then(Value::as_str) == Some(w))
        .unwrap_or(true)
}

/// Case-insensitive substring filter on the `name` field.
fn matches_name(value: &Value, wanted: Option<&str>) -> bool {
    wanted
        .map(|w| {
            value
                .get("name")
                .and_then(Value::as_str)
                .map(|n| n.to_lowercase().contains(&w.to_lowercase()))
                .unwrap_or(false)
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_folder(id: &str, name: &str, project_id: &str) -> Value {
        json!({"id": id, "name": name, "projectId": project_id})
    }

    #[test]
    fn test_state_add_and_get_folder() {
        let state =
            MockState::new().with_folder(sample_folder("fld_a", "Backbones", "prj_1"));

        let folder = state.get_folder("fld_a");
        assert!(folder.is_some());
        assert_eq!(folder.unwrap()["name"], "Backbones");
    }

    #[test]
    fn test_state_list_folders_with_filters() {
        let state = MockState::new()
            .with_folder(sample_folder("fld_a", "Backbones", "prj_1"))
            .with_folder(sample_folder("fld_b", "Inserts", "prj_1"))
            .with_folder(sample_folder("fld_c", "Scratch", "prj_2"));

        assert_eq!(state.list_folders(None, None).len(), 3);
        assert_eq!(state.list_folders(Some("prj_1"), None).len(), 2);
        assert_eq!(state.list_folders(None, Some("backbone")).len(), 1);
        assert_eq!(state.list_folders(Some("prj_2"), Some("inserts")).len(), 0);
    }

    #[test]
    fn test_state_lists_in_id_order() {
        let state = MockState::new()
            .with_sequence(json!({"id": "seq_c", "name": "third"}))
            .with_sequence(json!({"id": "seq_a", "name": "first"}))
            .with_sequence(json!({"id": "seq_b", "name": "second"}));

        let ids: Vec<&str> = state
            .list_sequences(None, None)
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["seq_a", "seq_b", "seq_c"]);
    }
}
