use tracing::{debug, info};
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use keeper_core::{Context, GuildDirectory, GuildRegistry};
use keeper_report::{QueryOptions, generate};
use keeper_utils::chunk::send_chunked_message;
use keeper_utils::parse::{ArgsError, Switch, parse_switches};
use keeper_utils::permissions::is_message_from_owner;

pub const META: CommandMeta = CommandMeta {
    name: "servers",
    aliases: &["guilds"],
    desc: "Count or list the servers the bot is in.",
    category: "admin",
    usage: "!servers [-a|--all] [-i|--initialized] [-u|--uninitialized] [search]",
};

const SWITCHES: &[Switch] = &[
    Switch {
        name: "all",
        shortcut: 'a',
    },
    Switch {
        name: "initialized",
        shortcut: 'i',
    },
    Switch {
        name: "uninitialized",
        shortcut: 'u',
    },
];

/// Report on joined guilds.
///
/// Without arguments this replies with total/initialized/uninitialized counts.
/// Any switch or search text switches to a filtered, name-sorted listing that
/// is split across as many messages as needed.
///
/// Only bot owners may run it; anyone else is ignored.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, rest: Option<&str>) -> anyhow::Result<()> {
    if !is_message_from_owner(&ctx.config.owner_ids, &msg) {
        debug!(user_id = msg.author.id.get(), "ignoring servers command from non-owner");
        return Ok(());
    }

    let options = match query_options(rest) {
        Ok(options) => options,
        Err(source) => {
            let out = format!("{source}. Usage: `{}`", META.usage);
            ctx.http.create_message(msg.channel_id).content(&out).await?;
            return Ok(());
        }
    };

    let text = servers_report(&ctx.guilds, &ctx.registry, &options).await?;
    info!(
        user_id = msg.author.id.get(),
        listing = options.wants_list(),
        "servers report requested"
    );

    send_chunked_message(&ctx.http, msg.channel_id, &text).await?;

    Ok(())
}

/// Turn the command's raw arguments into report options.
pub fn query_options(rest: Option<&str>) -> Result<QueryOptions, ArgsError> {
    let args = parse_switches(rest, SWITCHES)?;

    let options = QueryOptions {
        all: args.has("all"),
        initialized: args.has("initialized"),
        uninitialized: args.has("uninitialized"),
        search: None,
    }
    .with_search(args.rest.as_deref());

    Ok(options)
}

/// Snapshot both guild views and render the report text.
pub async fn servers_report(
    guilds: &GuildDirectory,
    registry: &GuildRegistry,
    options: &QueryOptions,
) -> anyhow::Result<String> {
    let joined = guilds.snapshot().await;
    let initialized = registry.loaded_ids().await;

    generate(&joined, &initialized, options)
}

#[cfg(test)]
mod tests {
    use keeper_report::{Guild, NO_MATCHES_MESSAGE};

    use super::*;

    async fn views() -> (GuildDirectory, GuildRegistry) {
        let guilds = GuildDirectory::default();
        guilds.upsert(Guild::new("1", "Zeta", 10)).await;
        guilds.upsert(Guild::new("22", "Alpha", 5)).await;

        let registry = GuildRegistry::default();
        registry.load("22").await;

        (guilds, registry)
    }

    #[test]
    fn parses_flags_and_search() {
        let options = query_options(Some("-iu rust  lounge")).unwrap();
        assert_eq!(
            options,
            QueryOptions {
                all: false,
                initialized: true,
                uninitialized: true,
                search: Some("rust  lounge".to_owned()),
            }
        );

        let options = query_options(Some("--all")).unwrap();
        assert!(options.all);
        assert_eq!(options.search, None);
    }

    #[test]
    fn no_arguments_means_summary() {
        let options = query_options(None).unwrap();
        assert_eq!(options, QueryOptions::default());
        assert!(!options.wants_list());
    }

    #[test]
    fn unknown_switch_is_an_error() {
        assert!(query_options(Some("-x")).is_err());
    }

    #[tokio::test]
    async fn summary_from_live_views() {
        let (guilds, registry) = views().await;

        let text = servers_report(&guilds, &registry, &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(
            text,
            "I am on **2 total servers**, of which **1 are initialized** and **1 are not initialized**"
        );
    }

    #[tokio::test]
    async fn listing_from_live_views() {
        let (guilds, registry) = views().await;

        let options = query_options(Some("-a")).unwrap();
        let text = servers_report(&guilds, &registry, &options).await.unwrap();
        assert_eq!(
            text,
            "`22` **Alpha** (initialized) (5 members)\n`1 ` **Zeta** (not initialized) (10 members)"
        );

        let options = query_options(Some("zt")).unwrap();
        let text = servers_report(&guilds, &registry, &options).await.unwrap();
        assert_eq!(text, "`1` **Zeta** (not initialized) (10 members)");
    }

    #[tokio::test]
    async fn uninitialized_listing_can_be_empty() {
        let (guilds, registry) = views().await;
        registry.load("1").await;

        let options = query_options(Some("--uninitialized")).unwrap();
        let text = servers_report(&guilds, &registry, &options).await.unwrap();

        assert_eq!(text, NO_MATCHES_MESSAGE);
    }
}
