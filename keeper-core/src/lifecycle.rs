use std::collections::HashSet;

use tracing::{debug, info};
use twilight_model::id::{Id, marker::GuildMarker};

use keeper_report::Guild;

use crate::{Config, GuildDirectory, GuildRegistry};

/// Record a guild that became available and initialize it when allowed.
///
/// Returns whether the guild is initialized afterwards.
pub async fn guild_available(
    config: &Config,
    guilds: &GuildDirectory,
    registry: &GuildRegistry,
    guild_id: Id<GuildMarker>,
    name: &str,
    member_count: u64,
) -> bool {
    let id = guild_id.get().to_string();
    guilds.upsert(Guild::new(id.clone(), name, member_count)).await;

    if !config.allows_guild(guild_id.get()) {
        debug!(
            guild_id = guild_id.get(),
            name, "guild not allowed, leaving it uninitialized"
        );
        return false;
    }

    if registry.load(&id).await {
        info!(guild_id = guild_id.get(), name, member_count, "guild initialized");
    }

    true
}

/// Apply a guild rename. Member counts are kept from the last full guild payload.
pub async fn guild_updated(guilds: &GuildDirectory, guild_id: Id<GuildMarker>, name: &str) {
    if !guilds.rename(&guild_id.get().to_string(), name).await {
        debug!(guild_id = guild_id.get(), "update for unknown guild ignored");
    }
}

/// Handle a guild going away.
///
/// State is always unloaded. The guild only leaves the joined view when the
/// bot was actually removed, not when the guild is temporarily unavailable.
pub async fn guild_removed(
    guilds: &GuildDirectory,
    registry: &GuildRegistry,
    guild_id: Id<GuildMarker>,
    unavailable: bool,
) {
    let id = guild_id.get().to_string();

    if let Some(state) = registry.unload(&id).await {
        info!(
            guild_id = guild_id.get(),
            unavailable,
            loaded_at = state.loaded_at,
            "guild unloaded"
        );
    }

    if !unavailable && guilds.remove(&id).await.is_some() {
        info!(guild_id = guild_id.get(), "left guild");
    }
}

/// Reconcile both views with the guild list of a fresh gateway session.
///
/// Guilds left while disconnected never produce a delete event, so anything
/// not listed in `Ready` is dropped from the joined view and unloaded.
pub async fn guilds_ready(
    guilds: &GuildDirectory,
    registry: &GuildRegistry,
    ready_ids: impl IntoIterator<Item = Id<GuildMarker>>,
) {
    let keep: HashSet<String> = ready_ids
        .into_iter()
        .map(|guild_id| guild_id.get().to_string())
        .collect();

    for state in registry.retain_ids(&keep).await {
        info!(
            guild_id = %state.guild_id,
            loaded_at = state.loaded_at,
            "guild unloaded, missing from ready"
        );
    }

    for guild in guilds.retain_ids(&keep).await {
        info!(guild_id = %guild.id, name = %guild.name, "left guild while disconnected");
    }

    info!(
        joined = guilds.len().await,
        initialized = registry.len().await,
        "guild views reconciled with ready"
    );
}
