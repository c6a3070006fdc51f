//! JSON-file-backed history store.

use std::path::{Path, PathBuf};

use tracing::debug;

use vgen_models::HistoryEntry;

use crate::error::{HistoryError, HistoryResult};

/// Store of past generations, persisted across process restarts.
///
/// Entries are kept newest-first. Every mutation rewrites the backing file
/// through a temp-file-and-rename so a crash cannot leave it truncated.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store at `path`, creating parent directories as needed. A
    /// missing file is an empty history.
    pub async fn open(path: impl Into<PathBuf>) -> HistoryResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = entries.len(), "Opened history store");
        Ok(Self { path, entries })
    }

    /// Open the store at its platform default location, overridable with
    /// `VGEN_HISTORY_PATH`.
    pub async fn open_default() -> HistoryResult<Self> {
        Self::open(Self::default_path()).await
    }

    /// Platform default location of the history file.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("VGEN_HISTORY_PATH") {
            return PathBuf::from(path);
        }
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("vgen")
            .join("history.json")
    }

    /// Record a generation. Newest entries come first.
    pub async fn add(&mut self, entry: HistoryEntry) -> HistoryResult<()> {
        self.entries.insert(0, entry);
        self.persist().await
    }

    /// All entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Remove one entry by id.
    pub async fn remove(&mut self, id: &str) -> HistoryResult<HistoryEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        let entry = self.entries.remove(index);
        self.persist().await?;
        Ok(entry)
    }

    /// Remove every entry.
    pub async fn clear(&mut self) -> HistoryResult<()> {
        self.entries.clear();
        self.persist().await
    }

    async fn persist(&self) -> HistoryResult<()> {
        let json = serde_json::to_vec_pretty(&self.entries)?;
        let tmp = temp_sibling(&self.path);
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "history.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vgen_models::GenerationRequest;

    fn entry(prompt: &str) -> HistoryEntry {
        HistoryEntry::from_request(&GenerationRequest::new(prompt), PathBuf::from("out.mp4"))
    }

    #[tokio::test]
    async fn test_add_keeps_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("history.json")).await.unwrap();

        store.add(entry("first")).await.unwrap();
        store.add(entry("second")).await.unwrap();

        let prompts: Vec<_> = store.list().iter().map(|e| e.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::open(&path).await.unwrap();
        store.add(entry("persisted")).await.unwrap();
        let id = store.list()[0].id.clone();
        drop(store);

        let reopened = HistoryStore::open(&path).await.unwrap();
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list()[0].id, id);
        assert_eq!(reopened.list()[0].prompt, "persisted");
    }

    #[tokio::test]
    async fn test_remove_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("history.json")).await.unwrap();

        store.add(entry("keep")).await.unwrap();
        store.add(entry("drop")).await.unwrap();
        let id = store.list()[0].id.clone();

        let removed = store.remove(&id).await.unwrap();
        assert_eq!(removed.prompt, "drop");
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].prompt, "keep");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path().join("history.json")).await.unwrap();

        let err = store.remove("missing").await.unwrap_err();
        assert!(matches!(err, HistoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_empties_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut store = HistoryStore::open(&path).await.unwrap();

        store.add(entry("one")).await.unwrap();
        store.add(entry("two")).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.list().is_empty());

        let reopened = HistoryStore::open(&path).await.unwrap();
        assert!(reopened.list().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("nested/history.json")).await.unwrap();
        assert!(store.list().is_empty());
    }
}
