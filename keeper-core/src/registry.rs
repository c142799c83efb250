use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::sync::RwLock;

/// Application-side state of a guild that has been initialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuildState {
    pub guild_id: String,
    pub loaded_at: u64,
}

/// Registry of guilds whose state is loaded.
#[derive(Clone, Default)]
pub struct GuildRegistry {
    loaded: Arc<RwLock<HashMap<String, GuildState>>>,
}

impl GuildRegistry {
    /// Mark a guild as initialized. Returns `false` if it already was.
    pub async fn load(&self, guild_id: &str) -> bool {
        let mut loaded = self.loaded.write().await;
        if loaded.contains_key(guild_id) {
            return false;
        }

        let state = GuildState {
            guild_id: guild_id.to_owned(),
            loaded_at: now_unix_secs(),
        };
        loaded.insert(guild_id.to_owned(), state);
        true
    }

    /// Drop a guild's state, returning it if the guild was initialized.
    pub async fn unload(&self, guild_id: &str) -> Option<GuildState> {
        self.loaded.write().await.remove(guild_id)
    }

    /// Unload every guild whose id is not in `keep`, returning the dropped states.
    pub async fn retain_ids(&self, keep: &HashSet<String>) -> Vec<GuildState> {
        let mut loaded = self.loaded.write().await;
        let stale: Vec<String> = loaded
            .keys()
            .filter(|guild_id| !keep.contains(*guild_id))
            .cloned()
            .collect();

        stale
            .iter()
            .filter_map(|guild_id| loaded.remove(guild_id))
            .collect()
    }

    #[cfg(test)]
    pub async fn is_loaded(&self, guild_id: &str) -> bool {
        self.loaded.read().await.contains_key(guild_id)
    }

    #[cfg(test)]
    pub async fn state(&self, guild_id: &str) -> Option<GuildState> {
        self.loaded.read().await.get(guild_id).cloned()
    }

    /// Ids of initialized guilds at the time of the call.
    pub async fn loaded_ids(&self) -> HashSet<String> {
        self.loaded.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.loaded.read().await.len()
    }
}

fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}
