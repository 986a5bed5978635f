use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
};

use {async_trait::async_trait, serde::Serialize, tokio::sync::RwLock};

use crate::{
    error::{Error, Result},
    schema::ChannelConfig,
};

/// A persisted channel configuration.
#[derive(Debug, Clone, Serialize)]
pub struct StoredChannelConfig {
    pub id: i64,
    pub bot_id: String,
    /// The bot-wide fallback configuration; at most one per bot.
    pub is_default: bool,
    pub config: ChannelConfig,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Persistent storage for channel configurations.
#[async_trait]
pub trait ChannelConfigStore: Send + Sync {
    async fn list(&self, bot_id: &str) -> Result<Vec<StoredChannelConfig>>;
    async fn get(&self, id: i64) -> Result<Option<StoredChannelConfig>>;
    /// Insert (`id == 0`) or update a configuration. Returns the stored row.
    async fn upsert(&self, record: StoredChannelConfig) -> Result<StoredChannelConfig>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// In-memory store used by the gateway until an external database is wired
/// in, and by tests.
pub struct MemoryChannelConfigStore {
    rows: RwLock<HashMap<i64, StoredChannelConfig>>,
    next_id: AtomicI64,
}

impl Default for MemoryChannelConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryChannelConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[async_trait]
impl ChannelConfigStore for MemoryChannelConfigStore {
    async fn list(&self, bot_id: &str) -> Result<Vec<StoredChannelConfig>> {
        let rows = self.rows.read().await;
        let mut configs: Vec<StoredChannelConfig> = rows
            .values()
            .filter(|r| r.bot_id == bot_id)
            .cloned()
            .collect();
        configs.sort_by_key(|r| r.id);
        Ok(configs)
    }

    async fn get(&self, id: i64) -> Result<Option<StoredChannelConfig>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn upsert(&self, mut record: StoredChannelConfig) -> Result<StoredChannelConfig> {
        if record.bot_id.is_empty() {
            return Err(Error::invalid_input("bot_id is required"));
        }

        let mut rows = self.rows.write().await;

        if record.is_default
            && rows
                .values()
                .any(|r| r.bot_id == record.bot_id && r.is_default && r.id != record.id)
        {
            return Err(Error::duplicate_default(&record.bot_id));
        }

        let now = unix_now();
        if record.id == 0 {
            record.id = self.next_id.fetch_add(1, Ordering::Relaxed);
            record.created_at = now;
        } else {
            match rows.get(&record.id) {
                Some(existing) => record.created_at = existing.created_at,
                None => return Err(Error::unknown_config(record.id)),
            }
        }
        record.updated_at = now;

        rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::unknown_config(id)),
        }
    }
}
