use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// Every chat that ever issued /start, mirrored to a JSON file after
/// each mutation. Entries are never removed.
pub struct SubscriberRegistry {
    path: PathBuf,
    chats: Mutex<BTreeSet<i64>>,
}

impl SubscriberRegistry {
    /// A missing file is a fresh install; an unparseable one is logged
    /// and replaced by an empty set. Never fatal.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let chats = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeSet<i64>>(&raw) {
                Ok(chats) => chats,
                Err(e) => {
                    log::warn!("Could not load {}: {}", path.display(), e);
                    BTreeSet::new()
                }
            },
            Err(_) => BTreeSet::new(),
        };

        Self {
            path,
            chats: Mutex::new(chats),
        }
    }

    /// Adds the chat (idempotent) and rewrites the whole file. The write
    /// happens under the set lock; concurrent registrations cannot
    /// interleave.
    pub async fn register(&self, chat_id: ChatId) -> Result<()> {
        let mut chats = self.chats.lock().await;
        chats.insert(chat_id.0);
        persist(&self.path, &chats)
    }

    pub async fn snapshot(&self) -> Vec<ChatId> {
        self.chats.lock().await.iter().map(|&id| ChatId(id)).collect()
    }

    pub async fn count(&self) -> usize {
        self.chats.lock().await.len()
    }
}

fn persist(path: &Path, chats: &BTreeSet<i64>) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(chats)?;
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SubscriberRegistry::load(dir.path().join("subscribers.json"));
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subscribers.json");
        std::fs::write(&path, "not json at all").unwrap();

        let registry = SubscriberRegistry::load(&path);
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_register_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subscribers.json");

        let registry = SubscriberRegistry::load(&path);
        registry.register(ChatId(100)).await.unwrap();
        registry.register(ChatId(7)).await.unwrap();

        let reloaded = SubscriberRegistry::load(&path);
        assert_eq!(reloaded.snapshot().await, vec![ChatId(7), ChatId(100)]);
    }

    #[tokio::test]
    async fn test_register_twice_keeps_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subscribers.json");

        let registry = SubscriberRegistry::load(&path);
        registry.register(ChatId(100)).await.unwrap();
        registry.register(ChatId(100)).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let stored: Vec<i64> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec![100]);
    }
}
