use std::{collections::HashSet, mem, sync::Arc};

use tokio::sync::RwLock;

use keeper_report::Guild;

/// Every guild the bot currently has access to, in the order they arrived.
#[derive(Clone, Default)]
pub struct GuildDirectory {
    guilds: Arc<RwLock<Vec<Guild>>>,
}

impl GuildDirectory {
    /// Insert a guild, or replace it in place if it is already known.
    pub async fn upsert(&self, guild: Guild) {
        let mut guilds = self.guilds.write().await;
        match guilds.iter_mut().find(|known| known.id == guild.id) {
            Some(known) => *known = guild,
            None => guilds.push(guild),
        }
    }

    /// Rename a known guild. Returns `false` when the guild is unknown.
    pub async fn rename(&self, guild_id: &str, name: &str) -> bool {
        let mut guilds = self.guilds.write().await;
        let Some(known) = guilds.iter_mut().find(|known| known.id == guild_id) else {
            return false;
        };

        name.clone_into(&mut known.name);
        true
    }

    /// Forget a guild the bot has left.
    pub async fn remove(&self, guild_id: &str) -> Option<Guild> {
        let mut guilds = self.guilds.write().await;
        let index = guilds.iter().position(|known| known.id == guild_id)?;
        Some(guilds.remove(index))
    }

    /// Forget every guild whose id is not in `keep`, returning the dropped guilds.
    pub async fn retain_ids(&self, keep: &HashSet<String>) -> Vec<Guild> {
        let mut guilds = self.guilds.write().await;
        let (kept, dropped): (Vec<Guild>, Vec<Guild>) = mem::take(&mut *guilds)
            .into_iter()
            .partition(|known| keep.contains(&known.id));
        *guilds = kept;
        dropped
    }

    #[cfg(test)]
    pub async fn get(&self, guild_id: &str) -> Option<Guild> {
        let guilds = self.guilds.read().await;
        guilds.iter().find(|known| known.id == guild_id).cloned()
    }

    /// Owned copy of the joined guilds for a single report.
    pub async fn snapshot(&self) -> Vec<Guild> {
        self.guilds.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.guilds.read().await.len()
    }
}
