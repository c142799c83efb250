pub mod admin;
pub mod utility;

use tracing::debug;
use twilight_model::gateway::payload::incoming::MessageCreate;

use keeper_core::Context;
use keeper_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    utility::usage::META,
    admin::servers::META,
    // Add new commands here
];

/// Resolve a command by name or alias, ignoring ASCII case and a leading prefix.
pub fn find_command(raw: &str) -> Option<&'static CommandMeta> {
    let lookup = raw.trim().trim_start_matches(COMMAND_PREFIX);

    COMMANDS.iter().find(|command| {
        command.name.eq_ignore_ascii_case(lookup)
            || command
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(lookup))
    })
}

/// Split prefixed message content into the command word and its trimmed remainder.
fn split_command(content: &str) -> Option<(&str, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim_start();

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().filter(|cmd| !cmd.is_empty())?;
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    Some((cmd, rest))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, rest)) = split_command(&content) else {
        return Ok(());
    };

    let Some(command) = find_command(cmd) else {
        return Ok(());
    };

    debug!(
        command = command.name,
        user_id = msg.author.id.get(),
        channel_id = msg.channel_id.get(),
        "dispatching command"
    );

    match command.name {
        "ping" => utility::ping::run(ctx, msg).await?,
        "help" => utility::help::run(ctx, msg).await?,
        "usage" => utility::usage::run(ctx, msg, rest).await?,
        "servers" => admin::servers::run(ctx, msg, rest).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}
