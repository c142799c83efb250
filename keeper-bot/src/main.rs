use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::{event::Event, payload::incoming::GuildCreate};

use rustls::crypto::ring::default_provider;

use keeper_commands::handle_message;
use keeper_core::{Config, Context, lifecycle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let token = config.token.clone();
    info!(
        owners = config.owner_ids.len(),
        allowlist = config.allowed_guild_ids.is_some(),
        "configuration loaded"
    );

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let ctx = Context::new(Arc::clone(&http), config);

    // Guild events keep the joined/initialized views current
    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("Keeper is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(ready) => {
                info!(guilds = ready.guilds.len(), "Keeper has successfully awoken!");
                lifecycle::guilds_ready(
                    &ctx.guilds,
                    &ctx.registry,
                    ready.guilds.iter().map(|guild| guild.id),
                )
                .await;
            }

            Event::GuildCreate(create) => match *create {
                GuildCreate::Available(guild) => {
                    lifecycle::guild_available(
                        &ctx.config,
                        &ctx.guilds,
                        &ctx.registry,
                        guild.id,
                        &guild.name,
                        guild.member_count.unwrap_or(0),
                    )
                    .await;
                }
                GuildCreate::Unavailable(guild) => {
                    lifecycle::guild_removed(&ctx.guilds, &ctx.registry, guild.id, true).await;
                }
            },
            Event::GuildUpdate(update) => {
                lifecycle::guild_updated(&ctx.guilds, update.0.id, &update.0.name).await;
            }
            Event::GuildDelete(delete) => {
                let unavailable = delete.unavailable.unwrap_or(false);
                lifecycle::guild_removed(&ctx.guilds, &ctx.registry, delete.id, unavailable).await;
            }

            Event::MessageCreate(msg) => {
                if let Err(source) = handle_message(ctx.clone(), msg).await {
                    error!(?source, "message command failed");
                }
            }
            _ => {} // Ignore unused events
        }
    }

    Ok(()) // Return Success, shutdown cleanly
}
